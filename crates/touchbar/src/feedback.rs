use crate::api::{Event, Feedback};

/// Receiver for selector feedback, typically mapped onto platform haptics.
pub trait FeedbackSink {
    fn feedback(&mut self, feedback: Feedback);
}

impl FeedbackSink for Vec<Feedback> {
    fn feedback(&mut self, feedback: Feedback) {
        self.push(feedback);
    }
}

/// Adapts a closure into a [`FeedbackSink`].
///
/// # Example
/// ```
/// use touchbar::{Feedback, FnSink, Handle, dispatch_feedback, Event};
///
/// let mut count = 0;
/// let mut sink = FnSink(|_feedback: Feedback| count += 1);
/// let events = [Event::Feedback(Feedback::moved(Handle::X))];
/// assert_eq!(dispatch_feedback(&events, &mut sink), 1);
/// drop(sink);
/// assert_eq!(count, 1);
/// ```
pub struct FnSink<F>(pub F);

impl<F> FeedbackSink for FnSink<F>
where
    F: FnMut(Feedback),
{
    fn feedback(&mut self, feedback: Feedback) {
        (self.0)(feedback);
    }
}

/// Forwards the feedback events among `events` to `sink`.
///
/// Returns how many were forwarded.
pub fn dispatch_feedback<S>(events: &[Event], sink: &mut S) -> usize
where
    S: FeedbackSink + ?Sized,
{
    let mut forwarded = 0;
    for event in events {
        if let Event::Feedback(feedback) = event {
            sink.feedback(*feedback);
            forwarded += 1;
        }
    }
    forwarded
}
