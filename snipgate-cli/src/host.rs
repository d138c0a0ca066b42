//! Terminal implementation of the editor host capabilities

use async_trait::async_trait;
use snipgate_core::EditorHost;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Host that prompts on stdin and prints messages to stdout
#[derive(Debug, Default)]
pub struct TerminalHost {
    /// Answer returned for prompts instead of reading stdin
    preset: Option<String>,
}

impl TerminalHost {
    #[must_use]
    pub const fn new(preset: Option<String>) -> Self {
        Self { preset }
    }
}

#[async_trait]
impl EditorHost for TerminalHost {
    async fn prompt(&self, title: &str) -> Option<String> {
        if let Some(answer) = &self.preset {
            return Some(answer.clone());
        }

        eprint!("{title}: ");
        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        match reader.read_line(&mut line).await {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    fn show_message(&self, message: &str) {
        println!("{message}");
    }
}
