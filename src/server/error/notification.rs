use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    /// The notification channel rejected or could not accept the message.
    #[error("Failed to deliver {channel} notification: {reason}")]
    Delivery {
        /// Channel name, e.g. `email` or `whatsapp`
        channel: &'static str,
        reason: String,
    },

    /// Notification payload could not be rendered.
    #[error(transparent)]
    Render(#[from] serde_json::Error),
}
