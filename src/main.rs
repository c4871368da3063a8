use dashfilter::cli::{run, user_error};

fn main() {
    if let Err(e) = run() {
        // A missing or malformed snapshot is the user's to fix; anything else is ours
        let error_str: String = e.to_string();
        if error_str.contains("Failed to read") || error_str.contains("Failed to parse") {
            user_error(&format!("{:#}", e));
        }

        eprintln!("Internal error: {}", e);
        let mut source = e.source();
        if source.is_some() {
            eprintln!("\nCaused by:");
            let mut indent = 1;
            while let Some(err) = source {
                eprintln!("{:indent$}  {}", "", err);
                source = err.source();
                indent += 1;
            }
        }
        std::process::exit(2);
    }
}
