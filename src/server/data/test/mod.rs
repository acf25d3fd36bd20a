mod banner;
mod inquiry;
mod sequence_counter;
