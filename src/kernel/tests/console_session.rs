//! End-to-end console session: boot, `help`, then an unknown command.

use daos_kernel::boot::banner::WELCOME;
use daos_kernel::terminal::{Console, Geometry, Outcome, Severity};
use daos_kernel::testutil::{type_scancodes, RecordingCrtc, ScriptedKeyboard, VgaMemory};

type TestConsole<'a> = Console<VgaMemory, RecordingCrtc, ScriptedKeyboard<'a>>;

fn console(script: &[u8]) -> TestConsole<'_> {
    Console::new(
        VgaMemory::new(),
        RecordingCrtc::new(),
        ScriptedKeyboard::new(script),
        Geometry::VGA,
    )
    .expect("VGA geometry fits VGA memory")
}

fn scancodes(text: &str) -> Vec<u8> {
    let mut out = vec![0u8; text.len() * 2];
    let len = type_scancodes(text, &mut out);
    out.truncate(len);
    out
}

fn status_text(console: &TestConsole<'_>) -> String {
    console
        .display()
        .buffer()
        .row_text(24)
        .collect::<String>()
        .trim()
        .to_string()
}

#[test]
fn boot_help_then_unknown_command() {
    let script = scancodes("help\nxyz\n");
    let mut console = console(&script);
    console.start();

    // Banner, blank grid, "Ready" in the info color.
    let buffer = console.display().buffer();
    let banner_row = buffer.find_row(WELCOME).expect("banner printed");
    let first_free = console.display().cursor().row;
    assert!(banner_row < first_free);
    for row in first_free..24 {
        assert!(buffer.is_row_blank(row), "row {} not blank", row);
    }
    assert_eq!(status_text(&console), "Ready");
    assert_eq!(buffer.row(24)[37].glyph, b'R');
    assert_eq!(buffer.row(24)[0].color, Severity::Info.color());
    assert_eq!(console.status().severity(), Some(Severity::Info));

    // help
    assert_eq!(console.step(), Outcome::Executed("help"));
    let buffer = console.display().buffer();
    let prompt_row = buffer.find_row("da-os> help").expect("prompt echoed");
    assert_eq!(prompt_row, first_free);
    assert!(buffer.find_row("Show system information").is_some());
    assert!(buffer.find_row("Clear the screen").is_some());
    assert!(buffer.find_row("Show this help message").is_some());
    assert_eq!(console.status().severity(), Some(Severity::Success));
    assert_eq!(buffer.row(24)[0].color, Severity::Success.color());

    // xyz
    assert_eq!(console.step(), Outcome::Unknown);
    let buffer = console.display().buffer();
    assert!(buffer.find_row("da-os> xyz").is_some());
    assert!(buffer.find_row("Unknown command: xyz").is_some());
    assert_eq!(console.status().severity(), Some(Severity::Error));
    assert_eq!(status_text(&console), "Unknown command");
    assert_eq!(buffer.row(24)[0].color, Severity::Error.color());

    assert_eq!(console.history().len(), 2);
    assert_eq!(console.history().get(0).unwrap().as_str(), "xyz");
    assert_eq!(console.keyboard().remaining(), 0);
}

#[test]
fn history_recall_reruns_command() {
    let mut script = scancodes("info\n");
    // Up arrow press and release, then Enter.
    script.extend_from_slice(&[0x48, 0xC8, 0x1C, 0x9C]);
    let mut console = console(&script);
    console.start();

    assert_eq!(console.step(), Outcome::Executed("info"));
    if cfg!(feature = "history") {
        assert_eq!(console.step(), Outcome::Executed("info"));
        assert_eq!(console.history().len(), 2);
    } else {
        // Keypad 8 types a digit instead.
        assert_eq!(console.step(), Outcome::Unknown);
    }
}

#[test]
fn clear_then_output_starts_at_top() {
    let script = scancodes("clear\nhelp\n");
    let mut console = console(&script);
    console.start();

    assert_eq!(console.step(), Outcome::Executed("clear"));
    assert!(console.display().buffer().is_row_blank(0));
    assert_eq!(console.display().cursor().row, 0);
    assert_eq!(status_text(&console), "Screen cleared");

    console.step();
    assert!(console.display().buffer().row_starts_with(0, "da-os> help"));
}

#[test]
fn empty_line_reports_unknown_command() {
    let script = scancodes("\n");
    let mut console = console(&script);
    console.start();

    assert_eq!(console.step(), Outcome::Unknown);
    assert_eq!(console.status().severity(), Some(Severity::Error));
    assert_eq!(status_text(&console), "Unknown command");
    assert!(console.display().buffer().find_row("Unknown command: ").is_some());
    assert!(console.history().is_empty());
}

#[test]
fn long_session_scrolls_without_touching_status() {
    let script = scancodes(&"help\n".repeat(6));
    let mut console = console(&script);
    console.start();

    for _ in 0..6 {
        assert_eq!(console.step(), Outcome::Executed("help"));
    }
    assert_eq!(status_text(&console), "Help displayed");
    assert_eq!(console.display().cursor().row, 23);
    assert!(console.display().buffer().find_row(WELCOME).is_none());
}
