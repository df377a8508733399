//! Console I/O primitives: screen clearing, rule drawing, and input
//! prompting. One integer per selection prompt; anything unparseable
//! comes back as -1, which every menu treats as an unrecognized choice.

use std::io::{self, BufRead, Write};

/// Width of the `=` rules framing every screen.
pub const RULE_WIDTH: usize = 60;

/// Cross-platform console clear via ANSI escape codes.
pub fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
    let _ = io::stdout().flush();
}

/// Draw a horizontal rule of `=` characters.
pub fn draw_rule(width: usize) {
    println!("{}", "=".repeat(width));
}

/// Prompt for one menu selection.
pub fn read_selection() -> i32 {
    println!();
    print!("Enter Selection: ");
    let _ = io::stdout().flush();

    let mut buffer = String::new();
    if io::stdin().lock().read_line(&mut buffer).is_err() {
        return -1;
    }
    buffer.trim().parse().unwrap_or(-1)
}

/// Prompt for one line of free text (trainer and rival names).
pub fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut buffer = String::new();
    let _ = io::stdin().lock().read_line(&mut buffer);
    buffer.trim_end_matches(['\r', '\n']).to_string()
}

/// Pause until the user presses Enter.
pub fn press_enter_to_continue() {
    println!();
    print!("Press Enter to Continue");
    let _ = io::stdout().flush();

    let mut buffer = String::new();
    let _ = io::stdin().lock().read_line(&mut buffer);
}
