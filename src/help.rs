pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("file-namer v{}", VERSION)
}

pub const USAGE: &str = "
Usage:
  file-namer [flags]

Flags:
  -t            Input text (required)
  -ext          File extension (default: dart)
  -sep          Word separator (default: _)
  -keep-numbers Preserve numbers (default: false)
  -help         Show help
  -version      Show version

Interactive Mode:
  Simply run the program without flags

Examples:
  file-namer -t \"Auth Service\" -ext go -sep _
  file-namer -t \"Data2024\" -ext cs -keep-numbers";
