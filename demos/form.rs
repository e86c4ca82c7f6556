//! Form Example - Inputs and a text area in a fullscreen terminal
//!
//! - API key: masked, with reveal and copy (Ctrl+R / Ctrl+Y)
//! - Email: leading icon, live validation error, a caller action
//! - Notes: text area with a 200 character counter
//!
//! Tab / Shift+Tab moves focus, F2 cycles themes, Esc quits.
//!
//! Run with: cargo run --example form

use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, size};
use spark_signals::{Signal, signal};
use spark_fields::{
    Action, Attr, FieldView, FrameBuffer, Icon, Input, InputProps, InputType, KeyboardEvent,
    PropValue, RenderError, Rgba, TerminalRenderer, TextArea, TextAreaProps, convert_key_event,
    get_preset, input, layout_field, paint_field, set_theme, text_area,
};
use spark_fields::state::timers;
use spark_fields::theme::preset_names;

/// Fallback wait when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

enum Field {
    Input(Input),
    TextArea(TextArea),
}

impl Field {
    fn view(&self) -> FieldView {
        match self {
            Self::Input(field) => field.view(),
            Self::TextArea(field) => field.view(),
        }
    }

    fn focus(&self) {
        match self {
            Self::Input(field) => field.focus(),
            Self::TextArea(field) => field.focus(),
        }
    }

    fn blur(&self) {
        match self {
            Self::Input(field) => field.blur(),
            Self::TextArea(field) => field.blur(),
        }
    }

    fn press(&self, id: &str) -> bool {
        match self {
            Self::Input(field) => field.press(id),
            Self::TextArea(_) => false,
        }
    }

    fn handle_key(&self, event: &KeyboardEvent) -> bool {
        match self {
            Self::Input(field) => field.handle_key(event),
            Self::TextArea(field) => field.handle_key(event),
        }
    }
}

fn build_fields(status: Signal<String>) -> Vec<Field> {
    let api_key = signal("sk_live_51HqLyjWDarjtT1zdp7dc".to_string());
    let email = signal(String::new());
    let notes = signal(String::new());

    let api_key_for_change = api_key.clone();
    let email_for_change = email.clone();
    let email_for_error = email.clone();
    let notes_for_change = notes.clone();

    let key_field = input(InputProps {
        id: Some("api-key".to_string()),
        label: Some("API key".to_string()),
        description: Some("Revealing the key is permanent for this session.".to_string()),
        copy: true,
        reveal: true,
        auto_focus: true,
        on_change: Some(Rc::new(move |event| {
            api_key_for_change.set(event.value.clone());
        })),
        ..InputProps::new(api_key)
    });

    let email_field = input(InputProps {
        id: Some("email".to_string()),
        label: Some("Email".to_string()),
        label_optional: Some("Optional".to_string()),
        input_type: InputType::Email,
        placeholder: Some("you@example.com".to_string()),
        icon: Some(Icon::new("@")),
        error: PropValue::getter(move || {
            let value = email_for_error.get();
            (!value.is_empty() && !value.contains('@'))
                .then(|| "Enter a valid email address".to_string())
        }),
        actions: vec![Action::new("clear", "Clear").on_press({
            let email = email.clone();
            let status = status.clone();
            move || {
                email.set(String::new());
                status.set("email cleared".to_string());
            }
        })],
        on_change: Some(Rc::new(move |event| {
            email_for_change.set(event.value.clone());
        })),
        ..InputProps::new(email)
    });

    let notes_field = text_area(TextAreaProps {
        id: Some("notes".to_string()),
        label: Some("Notes".to_string()),
        placeholder: Some("Anything we should know?".to_string()),
        limit: Some(200),
        on_change: Some(Rc::new(move |event| {
            notes_for_change.set(event.value.clone());
        })),
        ..TextAreaProps::new(notes)
    });

    vec![
        Field::Input(key_field),
        Field::Input(email_field),
        Field::TextArea(notes_field),
    ]
}

fn draw(
    renderer: &mut TerminalRenderer<std::io::Stdout>,
    fields: &[Field],
    status: &str,
) -> Result<(), RenderError> {
    let (width, height) = size()?;
    let field_width = width.saturating_sub(4).min(72).max(1);
    let mut frame = FrameBuffer::new(width, height);

    let mut y = 1;
    for field in fields {
        let view = field.view();
        let layout = layout_field(&view, field_width)?;
        paint_field(&mut frame, &view, &layout, (2, y));
        y = y.saturating_add(layout.bounds.height).saturating_add(1);
    }

    let help = "Tab focus · Ctrl+Y copy · Ctrl+R reveal · F2 theme · Esc quit";
    frame.draw_text(2, y, help, Rgba::GRAY, Attr::DIM, None);
    frame.draw_text(2, y.saturating_add(1), status, Rgba::GRAY, Attr::NONE, None);

    renderer.render(&frame)?;
    Ok(())
}

fn run(renderer: &mut TerminalRenderer<std::io::Stdout>) -> Result<(), RenderError> {
    let status = signal(String::new());
    let fields = build_fields(status.clone());
    let mut focused = 0usize;
    let mut theme_index = 0usize;

    loop {
        timers::run_due(Instant::now());
        draw(renderer, &fields, &status.get())?;

        let timeout = timers::next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Char('c') if ctrl => break,
                    KeyCode::Tab | KeyCode::BackTab => {
                        fields[focused].blur();
                        focused = if key.code == KeyCode::Tab {
                            (focused + 1) % fields.len()
                        } else {
                            (focused + fields.len() - 1) % fields.len()
                        };
                        fields[focused].focus();
                    }
                    KeyCode::Char('y') if ctrl => {
                        if fields[focused].press("copy") {
                            status.set("copy requested".to_string());
                        }
                    }
                    KeyCode::Char('r') if ctrl => {
                        if fields[focused].press("reveal") {
                            status.set("value revealed".to_string());
                        }
                    }
                    KeyCode::Char('l') if ctrl => {
                        fields[focused].press("clear");
                    }
                    KeyCode::F(2) => {
                        let names = preset_names();
                        theme_index = (theme_index + 1) % names.len();
                        if let Some(theme) = get_preset(names[theme_index]) {
                            status.set(format!("theme: {}", theme.name));
                            set_theme(theme);
                        }
                    }
                    _ => {
                        fields[focused].handle_key(&convert_key_event(key));
                    }
                }
            }
            Event::Resize(_, _) => renderer.invalidate(),
            _ => {}
        }
    }

    Ok(())
}

fn main() -> Result<(), RenderError> {
    enable_raw_mode()?;
    let mut renderer = TerminalRenderer::stdout();
    renderer.enter_fullscreen()?;

    let result = run(&mut renderer);

    renderer.exit_fullscreen()?;
    disable_raw_mode()?;
    result
}
