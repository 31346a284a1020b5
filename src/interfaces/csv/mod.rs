pub mod rate_writer;
pub mod request_reader;
pub mod result_writer;
