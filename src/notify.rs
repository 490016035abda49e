/// Receives rule violations so they can be shown to the player
pub trait NotificationSink {
    fn report_error(&mut self, title: &str, message: &str);
}
