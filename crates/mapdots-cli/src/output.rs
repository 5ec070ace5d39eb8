//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use mapdots_core::Dot;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a single dot
    pub fn print_dot(&self, dot: &Dot) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:          {}", dot.id);
                println!("Position:    {:.2}%, {:.2}%", dot.x, dot.y);
                println!("Title:       {}", dot.content.title);
                println!("Description: {}", dot.content.description);
                println!("Image:       {}", dot.content.image_url);
            }
            OutputFormat::Json => print_json(dot),
            OutputFormat::Quiet => {
                println!("{}", dot.id);
            }
        }
    }

    /// Print a list of dots
    pub fn print_dots(&self, dots: &[Dot]) {
        match self.format {
            OutputFormat::Human => {
                if dots.is_empty() {
                    println!("No dots placed.");
                    return;
                }
                for dot in dots {
                    println!(
                        "{} | {:>6.2} {:>6.2} | {}",
                        short_id(&dot.id),
                        dot.x,
                        dot.y,
                        truncate(&dot.content.title, 40)
                    );
                }
                println!("\n{} dot(s)", dots.len());
            }
            OutputFormat::Json => print_json(dots),
            OutputFormat::Quiet => {
                for dot in dots {
                    println!("{}", dot.id);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to encode JSON output: {}", e),
    }
}

/// The part of a dot id worth showing in a table
fn short_id(id: &str) -> &str {
    let body = id.strip_prefix("dot_").unwrap_or(id);
    body.get(..8).unwrap_or(body)
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
