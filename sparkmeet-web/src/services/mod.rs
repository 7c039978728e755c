pub(crate) mod notify;
pub(crate) mod observable;
pub(crate) mod session;
pub(crate) mod storage;

#[cfg(test)]
mod notify_test;
#[cfg(test)]
mod observable_test;
#[cfg(test)]
mod session_test;

pub use notify::Notifier;
pub use observable::use_subject;
pub use session::SessionStore;
