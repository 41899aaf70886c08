mod check_in_session;

pub use check_in_session::CheckInSession;
