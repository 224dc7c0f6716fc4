//! Output sink implementations

pub mod console_sink;
pub mod file_sink;

pub use console_sink::*;
pub use file_sink::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{GenerationError, OutputSink};
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("docs/snippets/get_user.txt");
        let sink = FileOutputSink::new(&path);

        sink.publish("mockMvc.perform(get(\"/users\"))").unwrap();

        let content = std::fs::read_to_string(&path).expect("Failed to read snippet");
        assert_eq!(content, "mockMvc.perform(get(\"/users\"))");
        assert_eq!(sink.path(), path.as_path());
    }

    #[test]
    fn test_file_sink_replaces_content() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out.txt");
        let sink = FileOutputSink::new(&path);

        sink.publish("first").unwrap();
        sink.publish("second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_file_sink_reports_output_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        // a directory cannot be written as a file
        let sink = FileOutputSink::new(temp_dir.path());
        assert!(matches!(sink.publish("x"), Err(GenerationError::OutputError(_))));
    }

    #[test]
    fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        sink.publish("a").unwrap();
        sink.publish("b").unwrap();
        assert_eq!(sink.published(), vec!["a", "b"]);
    }
}
