use sea_orm::DatabaseConnection;

use crate::server::{
    data::{inquiry::InquiryRepository, sequence_counter::SequenceCounterRepository},
    error::AppError,
    model::{
        inquiry::{CreateInquiryParams, Inquiry, UpdateInquiryParams},
        sequence::{BOOKING_PREFIX, BOOKING_SEQUENCE, BOOKING_WIDTH},
    },
    service::{
        notification::{InquiryNotification, Notifier},
        sequence::SequenceAllocator,
    },
};

pub struct InquiryService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
}

impl<'a> InquiryService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn Notifier) -> Self {
        Self { db, notifier }
    }

    /// Creates a booking inquiry under the next `log###` booking ID.
    ///
    /// Notification failures are logged and do not affect the result.
    ///
    /// # Returns
    /// - `Ok(Inquiry)` - The stored inquiry
    /// - `Err(AppError::BadRequest)` - Name or phone number missing
    /// - `Err(AppError::SequenceErr)` - No booking ID could be allocated
    pub async fn create(&self, params: CreateInquiryParams) -> Result<Inquiry, AppError> {
        if is_blank(&params.name) || is_blank(&params.phone_number) {
            return Err(required_contact_error());
        }

        let allocator = SequenceAllocator::new(SequenceCounterRepository::new(self.db));
        let booking_id = allocator
            .allocate_identifier(BOOKING_SEQUENCE, BOOKING_PREFIX, BOOKING_WIDTH)
            .await?;

        let inquiry = InquiryRepository::new(self.db)
            .create(booking_id, params)
            .await?;

        tracing::info!("Created inquiry {}", inquiry.booking_id);

        self.dispatch_notification(&inquiry).await;

        Ok(inquiry)
    }

    async fn dispatch_notification(&self, inquiry: &Inquiry) {
        let result = match InquiryNotification::render(inquiry) {
            Ok(notification) => self.notifier.notify(&notification).await,
            Err(err) => Err(err),
        };

        if let Err(err) = result {
            tracing::warn!(
                "Failed to send notification for inquiry {}: {}",
                inquiry.booking_id,
                err
            );
        }
    }

    /// Relays a free-form message from the site's WhatsApp widget to the rental desk.
    ///
    /// Unlike booking notifications, a delivery failure is reported to the caller since
    /// the message is stored nowhere else.
    ///
    /// # Returns
    /// - `Ok(())` - The message was handed to the notifier
    /// - `Err(AppError::BadRequest)` - Blank message
    /// - `Err(AppError::NotifyErr)` - Delivery failed
    pub async fn relay_message(&self, message: &str) -> Result<(), AppError> {
        if is_blank(message) {
            return Err(AppError::BadRequest("Message is required".to_string()));
        }

        self.notifier
            .notify(&InquiryNotification::relay(message))
            .await?;

        tracing::info!("Relayed customer message to the rental desk");

        Ok(())
    }

    /// Gets all inquiries, newest first.
    pub async fn get_all(&self) -> Result<Vec<Inquiry>, AppError> {
        Ok(InquiryRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Inquiry>, AppError> {
        Ok(InquiryRepository::new(self.db).find_by_id(id).await?)
    }

    /// Applies a partial update.
    ///
    /// Name and phone number may be changed but not cleared.
    ///
    /// # Returns
    /// - `Ok(Some(Inquiry))` - The updated inquiry
    /// - `Ok(None)` - No inquiry with this ID
    /// - `Err(AppError::BadRequest)` - Blank name or phone number supplied
    pub async fn update(
        &self,
        id: i32,
        params: UpdateInquiryParams,
    ) -> Result<Option<Inquiry>, AppError> {
        let clears_contact = [&params.name, &params.phone_number]
            .into_iter()
            .flatten()
            .any(|value| is_blank(value));
        if clears_contact {
            return Err(required_contact_error());
        }

        Ok(InquiryRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(InquiryRepository::new(self.db).delete(id).await?)
    }

    /// Deletes every inquiry and restarts booking IDs at `log001`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of inquiries deleted
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let deleted = InquiryRepository::new(self.db).delete_all().await?;

        SequenceAllocator::new(SequenceCounterRepository::new(self.db))
            .reset(BOOKING_SEQUENCE)
            .await?;

        tracing::info!("Deleted {} inquiries and reset booking IDs", deleted);

        Ok(deleted)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn required_contact_error() -> AppError {
    AppError::BadRequest("Name and phone number are required".to_string())
}
