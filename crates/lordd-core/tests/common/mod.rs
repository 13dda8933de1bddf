pub mod http_server;
pub mod set_archive;
