pub(crate) mod diagram_session;
pub(crate) mod opts;
