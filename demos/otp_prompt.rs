//! OTP Prompt Example - Terminal rendition of the code entry widget
//!
//! Demonstrates the controller driven by crossterm:
//! - Typing digits advances through the slots
//! - Backspace/Delete, arrows, Tab/Shift+Tab navigate
//! - Bracketed paste of a full code fills every slot
//! - Completing the code moves focus to Submit on the next frame
//!
//! Run with: cargo run --example otp_prompt
//! Logs: SPARK_OTP_LOG=debug cargo run --example otp_prompt 2> otp.log

use std::convert::Infallible;
use std::io::{self, Write, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use tracing_subscriber::EnvFilter;

use spark_otp::state::input::{
    TerminalAction, begin_frame, disable_paste, enable_paste, poll_event, route_event,
};
use spark_otp::{
    FocusTarget, OtpCode, OtpController, OtpProps, OtpView, create_submit_enabled_derived,
};

const LEFT: u16 = 2;
const SLOT_ROW: u16 = 4;
const SLOT_WIDTH: u16 = 4;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SPARK_OTP_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let props = OtpProps::default();
    let mut controller = OtpController::with_props(&props);

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide)?;
    enable_paste()?;

    let result = run(&mut controller, &props);

    // Undo setup in reverse; every step runs even if an earlier one failed
    let restored = [
        disable_paste(),
        execute!(stdout(), Show, LeaveAlternateScreen),
        disable_raw_mode(),
    ];

    let code = result?;
    for step in restored {
        step?;
    }

    match code {
        Some(code) => println!("Submitted code: {}", code),
        None => println!("Cancelled"),
    }
    Ok(())
}

fn run(controller: &mut OtpController, props: &OtpProps) -> io::Result<Option<OtpCode>> {
    let view = controller.bind_view();
    let submit_enabled = create_submit_enabled_derived(&view);
    let mut caret = 0usize;

    loop {
        if let Some(request) = begin_frame(controller) {
            caret = request.offset;
        }
        draw(&view, submit_enabled.get(), props, caret)?;

        let Some(event) = poll_event(Duration::from_millis(50))? else {
            continue;
        };

        match route_event(controller, event) {
            TerminalAction::Continue => {}
            TerminalAction::Quit => return Ok(None),
            TerminalAction::Submit => {
                let Some(guard) = controller.submit_guard() else {
                    continue;
                };
                let mut submitted = None;
                let code = guard
                    .submit(&mut |code: &OtpCode| -> Result<(), Infallible> {
                        submitted = Some(code.clone());
                        Ok(())
                    })
                    .unwrap_or_else(|never| match never {});
                tracing::info!(matches = (submitted.as_ref() == Some(&code)), "code handed off");
                return Ok(Some(code));
            }
        }
    }
}

fn draw(view: &OtpView, submit_enabled: bool, props: &OtpProps, caret: usize) -> io::Result<()> {
    let mut out = stdout();
    let focus = view.focus();

    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(LEFT, 1),
        SetAttribute(Attribute::Bold),
        Print(&props.heading),
        SetAttribute(Attribute::Reset),
        MoveTo(LEFT, 2),
        Print(&props.prompt),
    )?;

    for (index, slot) in view.slots().iter().enumerate() {
        let column = LEFT + index as u16 * SLOT_WIDTH;
        queue!(out, MoveTo(column, SLOT_ROW))?;
        if focus == FocusTarget::Slot(index) {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        match slot {
            Some(digit) => queue!(out, Print(format!("[{}]", digit)))?,
            None => queue!(
                out,
                Print("["),
                SetAttribute(Attribute::Dim),
                Print(props.placeholder),
                SetAttribute(Attribute::NormalIntensity),
                Print("]"),
            )?,
        }
        queue!(out, SetAttribute(Attribute::Reset))?;
    }

    if view.error_visible() {
        queue!(
            out,
            MoveTo(LEFT, SLOT_ROW + 2),
            SetForegroundColor(Color::Red),
            Print(&props.error_message),
            ResetColor,
        )?;
    }

    queue!(out, MoveTo(LEFT, SLOT_ROW + 4))?;
    if !submit_enabled {
        queue!(out, SetAttribute(Attribute::Dim))?;
    } else if focus.is_submit() {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    queue!(
        out,
        Print(format!("[ {} ]", props.submit_label)),
        SetAttribute(Attribute::Reset),
        MoveTo(LEFT, SLOT_ROW + 6),
        SetAttribute(Attribute::Dim),
        Print("Esc to cancel"),
        SetAttribute(Attribute::Reset),
    )?;

    match focus {
        FocusTarget::Slot(index) => {
            let column = LEFT + index as u16 * SLOT_WIDTH + 1 + caret as u16;
            queue!(out, MoveTo(column, SLOT_ROW), Show)?;
        }
        FocusTarget::Submit => queue!(out, Hide)?,
    }

    out.flush()
}
