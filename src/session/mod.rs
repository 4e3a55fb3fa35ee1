pub(crate) mod player;
pub(crate) mod render_session;
pub(crate) mod sink;
