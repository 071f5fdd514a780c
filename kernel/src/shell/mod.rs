/// ZenOS interactive shell on the VGA text console.
///
/// One flow of control, forever: print the prompt, pull a line from the
/// keyboard (echoing through the console as it goes), dispatch it to a
/// built-in handler. The only suspension point is the blocking key read.
/// There is deliberately no exit command and no way out of the loop.
mod calc;
mod commands;
mod line;

use crate::console::{Console, Surface};

use line::LineEditor;

const PROMPT: &str = "ZenOS> ";

/// Source of translated key bytes: `\n` for Enter, 0x08 for Backspace,
/// printable bytes for everything the keyboard reports. Blocks until a
/// key arrives. The PS/2 driver implements this on hardware; tests feed
/// a scripted queue.
pub trait KeySource {
    fn read_key(&mut self) -> u8;
}

/// Run the shell. This function never returns.
pub fn run<S: Surface, K: KeySource>(con: &mut Console<S>, keys: &mut K) -> ! {
    con.write_str("Welcome To ZenOS\n");

    let mut editor = LineEditor::new();

    loop {
        con.write_str(PROMPT);
        let input = editor.read_line(con, keys);
        if !input.is_empty() {
            commands::dispatch(input, con);
        }
    }
}
