pub mod request_reader;
pub mod result_writer;
pub mod schedule_writer;
