pub mod form;
pub mod presenters;
pub mod session;
