mod get_session;
mod list_sessions;
