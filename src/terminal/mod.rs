mod display;
mod script;
mod session;

pub use display::{DisplayError, TerminalDisplay};
pub use script::ScriptedMoves;
pub use session::{Reply, Session};

use std::io::{self, Write};

use crate::BoardDisplay;
use crate::feedback::compute_feedback;

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Runs an interactive two-player game in the terminal.
pub fn run_interactive_terminal() {
    let mut session = Session::new();
    let mut display = TerminalDisplay::new();

    clear_screen();
    draw_interface(&session, &mut display);

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to flush stdout: {}", e);
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                break;
            }
        }

        let reply = session.handle(&input);
        if reply == Reply::Quit {
            break;
        }
        if let Reply::Usage(usage) = &reply {
            println!("{usage}");
            continue;
        }

        clear_screen();
        draw_interface(&session, &mut display);
        report(&reply);

        if let Reply::Fatal(e) = &reply {
            eprintln!("Board is corrupted, ending game: {e}");
            break;
        }
    }
}

/// Draws the help text, whose turn it is, and the board.
fn draw_interface(session: &Session, display: &mut TerminalDisplay) {
    println!("♟️  Chess Rules Engine");
    println!();
    println!("Commands: e2-e4 | s <square> | load <fen> | r (reset) | p (refresh) | q (quit)");
    println!();

    let feedback = compute_feedback(&session.snapshot());
    if let Err(e) = display.show(session.game().board(), &feedback) {
        eprintln!("Failed to draw board: {}", e);
    }

    let game = session.game();
    println!();
    println!("Turn {:03} | {} to move", game.turn(), game.current_side());
}

/// Prints the outcome of the last command below the board.
fn report(reply: &Reply) {
    match reply {
        Reply::Moved {
            request,
            captured,
            check,
        } => {
            print!("✅ {request}");
            if let Some(piece) = captured.and_then(|p| p.owner().zip(p.symbol())) {
                print!(", captured {} {}", piece.0, piece.1);
            }
            if *check {
                print!(", check!");
            }
            println!();
        }
        Reply::Rejected(e) => println!("❌ {e}"),
        Reply::Fatal(_) => println!("💥 Game over"),
        Reply::Loaded => println!("✅ Position loaded from FEN"),
        Reply::Reset => println!("🔄 Reset to initial state"),
        Reply::Selected(_) | Reply::Refresh | Reply::Quit | Reply::Usage(_) => {}
    }
}
