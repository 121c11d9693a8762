//! Ratatui kiosk for the lead wizard.
//!
//! Provides a full-screen terminal UI with a hero screen, one question per
//! screen with a progress bar, a thank-you screen and an optional admin
//! table of the leads collected in this session.

use std::io::{self, Stdout};
use std::time::Duration as StdDuration;

use chrono::{DateTime, Local, Utc};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use leadform::{Advance, DirectoryTarget, ExportOutcome, ExportTarget, FieldId, Phase, Wizard};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};
use thiserror::Error;

use crate::brand::{BrandConfig, LogoArt, TAGLINE};
use crate::keys::{Action, map_key};

/// How often the event loop wakes up to let the thank-you timer run.
const POLL_INTERVAL: StdDuration = StdDuration::from_millis(100);

/// Error type for the Ratatui kiosk.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup/restore error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl RatatuiError {
    fn terminal(context: &str, err: io::Error) -> Self {
        Self::Terminal(format!("{context}: {err}"))
    }
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

/// Brand purple, `#6F2DBD`.
pub const BRAND_PURPLE: Color = Color::Rgb(0x6F, 0x2D, 0xBD);

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: BRAND_PURPLE,
            background: BRAND_PURPLE,
            text: Color::White,
            muted: Color::Gray,
            highlight: Color::White,
            error: Color::LightRed,
            success: Color::LightGreen,
            border: Color::Gray,
        }
    }
}

/// Everything the kiosk shows, minus the terminal.
///
/// Key presses go in through [`Kiosk::handle_key`], time through
/// [`Kiosk::tick`], and [`Kiosk::draw`] renders the current screen.
pub struct Kiosk<T: ExportTarget> {
    wizard: Wizard<T>,
    logo: LogoArt,
    theme: Theme,
    status: Option<String>,
    quit: bool,
}

impl<T: ExportTarget> Kiosk<T> {
    pub fn new(wizard: Wizard<T>, logo: LogoArt) -> Self {
        Self {
            wizard,
            logo,
            theme: Theme::default(),
            status: None,
            quit: false,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn wizard(&self) -> &Wizard<T> {
        &self.wizard
    }

    /// Status line of the admin table (last bulk export).
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Translate and apply a key press.
    pub fn handle_key(&mut self, key: &KeyEvent, now: DateTime<Utc>) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(action) = map_key(key, self.wizard.phase()) {
            self.apply(action, now);
        }
    }

    /// Apply an action to the wizard.
    pub fn apply(&mut self, action: Action, now: DateTime<Utc>) {
        match action {
            Action::Start => self.wizard.start(),
            Action::Advance => {
                if let Advance::Submitted { export, .. } = self.wizard.advance(now) {
                    tracing::info!(export = ?export, "lead exported");
                }
            }
            Action::Retreat => self.wizard.retreat(),
            Action::Input(c) => self.wizard.push_char(c),
            Action::Backspace => self.wizard.pop_char(),
            Action::ToggleConsent => self.wizard.toggle_consent(),
            Action::ToggleAdmin => self.wizard.toggle_admin(),
            Action::ExportCsv => self.bulk_export("CSV", Wizard::export_csv),
            Action::ExportTxt => self.bulk_export("TXT", Wizard::export_txt),
            Action::DismissThankYou => self.wizard.dismiss_thank_you(),
            Action::Quit => self.quit = true,
        }
    }

    fn bulk_export(&mut self, format: &str, export: fn(&Wizard<T>) -> Option<ExportOutcome>) {
        // Only while the admin table is on screen.
        if !self.wizard.is_admin() || !matches!(self.wizard.phase(), Phase::OnStep(_)) {
            return;
        }
        self.status = export(&self.wizard).map(|outcome| match outcome {
            ExportOutcome::Saved => format!("{format} exportado."),
            ExportOutcome::OpenedInline => format!("{format} aberto como data URI."),
            ExportOutcome::Failed => format!("Não foi possível exportar {format}."),
        });
    }

    /// Let time pass.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.wizard.tick(now) {
            tracing::debug!("thank-you screen expired");
        }
    }

    /// Render the current screen.
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.background)),
            area,
        );

        match self.wizard.phase() {
            Phase::NotStarted => self.draw_hero(frame, area),
            Phase::OnStep(step) => self.draw_form(frame, area, step),
            Phase::ShowingThankYou { .. } => self.draw_thank_you(frame, area),
        }
    }

    fn logo_lines(&self) -> Vec<Line<'_>> {
        self.logo
            .lines()
            .iter()
            .map(|l| Line::from(l.as_str()).style(Style::default().fg(self.theme.text).bold()))
            .collect()
    }

    fn draw_hero(&self, frame: &mut Frame, area: Rect) {
        let mut lines = self.logo_lines();
        lines.push(Line::default());
        lines.push(Line::from(TAGLINE).style(Style::default().fg(self.theme.muted)));
        lines.push(Line::default());
        lines.push(Line::from(" Começar → ").style(
            Style::default()
                .fg(self.theme.primary)
                .bg(self.theme.highlight)
                .bold(),
        ));
        lines.push(Line::default());
        lines.push(
            Line::from("Enter: começar  Esc: sair").style(Style::default().fg(self.theme.muted)),
        );

        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let centered = center_vertically(area, height);
        let hero = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(hero, centered);
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect, step: FieldId) {
        let admin_height = if self.wizard.is_admin() {
            Constraint::Min(8)
        } else {
            Constraint::Length(0)
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(self.logo.height().saturating_add(2)), // Header
                Constraint::Length(2),                                    // Progress bar
                Constraint::Length(12),                                   // Question
                Constraint::Length(2),                                    // Help
                admin_height,                                             // Admin table
            ])
            .split(area);

        // Header
        let mut header = self.logo_lines();
        header.push(Line::from(TAGLINE).style(Style::default().fg(self.theme.muted)));
        frame.render_widget(
            Paragraph::new(header).alignment(Alignment::Center),
            chunks[0],
        );

        self.draw_progress(frame, chunks[1]);
        self.draw_question(frame, chunks[2], step);

        let help = Paragraph::new(
            "Enter/↓: responder  ↑: voltar  Ctrl+Shift+A: admin  Esc: sair",
        )
        .style(Style::default().fg(self.theme.muted))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(self.theme.border)),
        );
        frame.render_widget(help, chunks[3]);

        if self.wizard.is_admin() {
            self.draw_admin(frame, chunks[4]);
        }
    }

    fn draw_progress(&self, frame: &mut Frame, area: Rect) {
        if area.width < 3 || area.height == 0 {
            return;
        }
        let percent = self.wizard.progress_percent();
        let bar_width = area.width.saturating_sub(2);
        let filled_width = (u32::from(bar_width) * u32::from(percent) / 100) as u16;
        let bar_x = area.x + 1;

        // Background track
        let track = "─".repeat(bar_width as usize);
        frame.render_widget(
            Paragraph::new(track).style(Style::default().fg(self.theme.border)),
            Rect::new(bar_x, area.y, bar_width, 1),
        );

        // Filled portion
        if filled_width > 0 {
            let filled = "━".repeat(filled_width as usize);
            frame.render_widget(
                Paragraph::new(filled).style(Style::default().fg(self.theme.highlight)),
                Rect::new(bar_x, area.y, filled_width, 1),
            );
        }

        if area.height > 1 {
            let text = format!(
                " {} / {} ",
                self.wizard.step_index() + 1,
                FieldId::COUNT
            );
            frame.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(self.theme.muted))
                    .alignment(Alignment::Center),
                Rect::new(area.x, area.y + 1, area.width, 1),
            );
        }
    }

    fn draw_question(&self, frame: &mut Frame, area: Rect, step: FieldId) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Label
                Constraint::Length(1), // Hint
                Constraint::Length(3), // Input
                Constraint::Length(1), // Error
                Constraint::Length(1), // Button
                Constraint::Min(0),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(step.label()).style(Style::default().fg(self.theme.text).bold()),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(step.hint()).style(Style::default().fg(self.theme.muted)),
            rows[1],
        );

        let drafts = self.wizard.drafts();
        match drafts.text(step) {
            Some(value) => {
                let input_block = Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(self.theme.highlight));
                let input = if value.is_empty() {
                    Paragraph::new(step.placeholder()).style(Style::default().fg(self.theme.muted))
                } else {
                    Paragraph::new(value).style(Style::default().fg(self.theme.text))
                };
                frame.render_widget(input.block(input_block), rows[2]);

                let typed = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
                let cursor_x = rows[2]
                    .x
                    .saturating_add(typed)
                    .min(rows[2].right().saturating_sub(1));
                frame.set_cursor_position((cursor_x, rows[2].y));
            }
            None => {
                let checkbox = if drafts.consent { "[✓]" } else { "[ ]" };
                let consent = Paragraph::new(Line::from(vec![
                    Span::styled(
                        format!("{checkbox} "),
                        Style::default().fg(self.theme.highlight).bold(),
                    ),
                    Span::styled(
                        "Autorizo o contato da KlassVough e concordo com a Política de Privacidade.",
                        Style::default().fg(self.theme.text),
                    ),
                ]))
                .wrap(Wrap { trim: true });
                frame.render_widget(consent, rows[2]);
            }
        }

        // Error message
        if let Some(error) = self.wizard.current_error() {
            frame.render_widget(
                Paragraph::new(error.message()).style(Style::default().fg(self.theme.error).bold()),
                rows[3],
            );
        }

        let button = if step.is_last() { " Enviar " } else { " Responder " };
        let button_width = rows[4].width.min(button.chars().count() as u16);
        frame.render_widget(
            Paragraph::new(button).style(
                Style::default()
                    .fg(self.theme.primary)
                    .bg(self.theme.highlight)
                    .bold(),
            ),
            Rect::new(rows[4].x, rows[4].y, button_width, rows[4].height),
        );
    }

    fn draw_admin(&self, frame: &mut Frame, area: Rect) {
        let leads = self.wizard.leads();
        let actions = if leads.is_empty() {
            Style::default().fg(self.theme.muted).dim()
        } else {
            Style::default().fg(self.theme.highlight)
        };

        let mut title = vec![
            Span::styled(
                " Leads recebidos (sessão atual) ",
                Style::default().fg(self.theme.text).bold(),
            ),
            Span::styled(" F2: Exportar CSV  F3: Exportar TXT ", actions),
        ];
        if let Some(status) = &self.status {
            title.push(Span::styled(
                format!(" {status} "),
                Style::default().fg(self.theme.success),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(Line::from(title));

        let header = Row::new(
            ["Data", "Nome", "E-mail", "Telefone", "Cidade", "Consentimento"]
                .into_iter()
                .map(|h| Cell::from(h).style(Style::default().bold())),
        );

        let rows: Vec<Row> = if leads.is_empty() {
            vec![Row::new([Cell::from(
                "Nenhum lead ainda. Envie o formulário acima.",
            )])
            .style(Style::default().fg(self.theme.muted))]
        } else {
            leads
                .iter()
                .map(|lead| {
                    Row::new([
                        Cell::from(local_timestamp(lead.created_at())),
                        Cell::from(lead.name().to_string()),
                        Cell::from(lead.email().to_string()),
                        Cell::from(lead.phone().to_string()),
                        Cell::from(lead.city().to_string()),
                        Cell::from(if lead.consent() { "Sim" } else { "Não" }),
                    ])
                })
                .collect()
        };

        // The empty-state row spans the table, so its single cell gets the full width.
        let widths: Vec<Constraint> = if leads.is_empty() {
            vec![Constraint::Percentage(100)]
        } else {
            vec![
                Constraint::Length(20),
                Constraint::Percentage(20),
                Constraint::Percentage(25),
                Constraint::Length(16),
                Constraint::Percentage(15),
                Constraint::Length(13),
            ]
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .style(Style::default().fg(self.theme.text));
        frame.render_widget(table, area);
    }

    fn draw_thank_you(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.success));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from("✓").style(Style::default().fg(self.theme.success).bold()),
            Line::default(),
            Line::from("Obrigado!").style(Style::default().fg(self.theme.text).bold()),
            Line::default(),
            Line::from("Recebemos seus dados. Voltando à tela inicial…")
                .style(Style::default().fg(self.theme.muted)),
        ];
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            center_vertically(inner, height),
        );
    }
}

fn center_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let top = (area.height - height) / 2;
    Rect::new(area.x, area.y + top, area.width, height)
}

fn local_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%d/%m/%Y, %H:%M:%S")
        .to_string()
}

/// Terminal runner for the kiosk.
///
/// Owns the terminal for the lifetime of [`KioskApp::run`], which returns
/// when the user quits.
#[derive(Debug, Clone)]
pub struct KioskApp {
    brand: BrandConfig,
    theme: Theme,
    admin: bool,
    thank_you_delay: StdDuration,
    export_dir: std::path::PathBuf,
    fallback_dir: Option<std::path::PathBuf>,
}

impl KioskApp {
    /// Create a kiosk with the given brand configuration.
    pub fn new(brand: BrandConfig) -> Self {
        Self {
            brand,
            theme: Theme::default(),
            admin: false,
            thank_you_delay: StdDuration::from_millis(leadform::DEFAULT_THANK_YOU_DELAY_MS),
            export_dir: std::path::PathBuf::from("."),
            fallback_dir: None,
        }
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Show the admin table from the start.
    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// How long the thank-you screen stays up.
    pub fn with_thank_you_delay(mut self, delay: StdDuration) -> Self {
        self.thank_you_delay = delay;
        self
    }

    /// Directory lead files are saved into.
    pub fn with_export_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    /// Directory the inline fallback spools into.
    pub fn with_fallback_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.fallback_dir = Some(dir.into());
        self
    }

    /// Build the kiosk state this app would run.
    pub fn kiosk(&self) -> Kiosk<DirectoryTarget> {
        let mut target = DirectoryTarget::new(&self.export_dir);
        if let Some(dir) = &self.fallback_dir {
            target = target.with_fallback_dir(dir);
        }
        let wizard = Wizard::new(target)
            .with_thank_you_delay(self.thank_you_delay)
            .with_admin(self.admin);
        Kiosk::new(wizard, LogoArt::load(&self.brand)).with_theme(self.theme.clone())
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        enable_raw_mode().map_err(|e| RatatuiError::terminal("cannot enable raw mode", e))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| RatatuiError::terminal("cannot enter alternate screen", e))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode().map_err(|e| RatatuiError::terminal("cannot disable raw mode", e))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| RatatuiError::terminal("cannot leave alternate screen", e))?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run until the user quits. Returns the leads collected in the session.
    pub fn run(&self) -> Result<Vec<leadform::Lead>, RatatuiError> {
        let mut kiosk = self.kiosk();
        let mut terminal = self.setup_terminal()?;

        let result = event_loop(&mut terminal, &mut kiosk);
        let restored = self.restore_terminal(&mut terminal);

        result?;
        restored?;
        Ok(kiosk.wizard().leads().to_vec())
    }
}

fn event_loop<T: ExportTarget>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    kiosk: &mut Kiosk<T>,
) -> Result<(), RatatuiError> {
    while !kiosk.should_quit() {
        kiosk.tick(Utc::now());
        terminal.draw(|frame| kiosk.draw(frame))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            kiosk.handle_key(&key, Utc::now());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crossterm::event::{KeyCode, KeyModifiers};
    use leadform::RecordingTarget;
    use ratatui::backend::TestBackend;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, 8, 9, 10).unwrap()
    }

    fn kiosk() -> Kiosk<RecordingTarget> {
        Kiosk::new(Wizard::new(RecordingTarget::new()), LogoArt::wordmark())
    }

    fn press(kiosk: &mut Kiosk<RecordingTarget>, code: KeyCode) {
        kiosk.handle_key(&KeyEvent::new(code, KeyModifiers::NONE), now());
    }

    fn type_text(kiosk: &mut Kiosk<RecordingTarget>, text: &str) {
        for c in text.chars() {
            press(kiosk, KeyCode::Char(c));
        }
    }

    fn render(kiosk: &Kiosk<RecordingTarget>) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| kiosk.draw(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    fn fill_all(kiosk: &mut Kiosk<RecordingTarget>) {
        press(kiosk, KeyCode::Enter);
        for answer in ["Ana Souza", "11912345678", "ana@exemplo.com", "Campinas/SP"] {
            type_text(kiosk, answer);
            press(kiosk, KeyCode::Enter);
        }
        press(kiosk, KeyCode::Char(' '));
    }

    #[test]
    fn hero_screen() {
        let screen = render(&kiosk());
        assert!(screen.contains("K L A S S   V O U G H"));
        assert!(screen.contains("Compromisso com a beleza."));
        assert!(screen.contains("Começar →"));
    }

    #[test]
    fn question_screen() {
        let mut kiosk = kiosk();
        press(&mut kiosk, KeyCode::Enter);
        let screen = render(&kiosk);
        assert!(screen.contains("Qual o seu nome?"));
        assert!(screen.contains("Coloque seu nome completo"));
        assert!(screen.contains("Escreva sua resposta..."));
        assert!(screen.contains("Informe seu nome completo."));
        assert!(screen.contains("Responder"));
        assert!(screen.contains("1 / 5"));
    }

    #[test]
    fn typed_phone_is_shown_masked() {
        let mut kiosk = kiosk();
        press(&mut kiosk, KeyCode::Enter);
        type_text(&mut kiosk, "Ana");
        press(&mut kiosk, KeyCode::Down);
        type_text(&mut kiosk, "11912345678");

        let screen = render(&kiosk);
        assert!(screen.contains("Qual o seu telefone?"));
        assert!(screen.contains("(11) 91234-5678"));
        assert!(!screen.contains("Informe um telefone válido."));
    }

    #[test]
    fn consent_screen_has_send_button() {
        let mut kiosk = kiosk();
        fill_all(&mut kiosk);
        let screen = render(&kiosk);
        assert!(screen.contains("Autoriza contato da KlassVough?"));
        assert!(screen.contains("[✓]"));
        assert!(screen.contains("Enviar"));
    }

    #[test]
    fn submit_shows_thank_you_then_hero() {
        let mut kiosk = kiosk();
        fill_all(&mut kiosk);
        press(&mut kiosk, KeyCode::Enter);

        assert_eq!(kiosk.wizard().leads().len(), 1);
        assert_eq!(kiosk.wizard().export_target().save_count(), 1);
        let screen = render(&kiosk);
        assert!(screen.contains("Obrigado!"));
        assert!(screen.contains("Recebemos seus dados. Voltando à tela inicial…"));

        kiosk.tick(now() + chrono::Duration::seconds(2));
        assert_eq!(kiosk.wizard().phase(), Phase::NotStarted);
        assert!(render(&kiosk).contains("Começar →"));
    }

    #[test]
    fn admin_table_empty_state() {
        let mut kiosk = kiosk();
        press(&mut kiosk, KeyCode::Enter);
        kiosk.apply(Action::ToggleAdmin, now());

        let screen = render(&kiosk);
        assert!(screen.contains("Leads recebidos (sessão atual)"));
        assert!(screen.contains("Nenhum lead ainda. Envie o formulário acima."));
    }

    #[test]
    fn admin_table_lists_leads() {
        let mut kiosk = kiosk();
        fill_all(&mut kiosk);
        press(&mut kiosk, KeyCode::Enter);
        kiosk.apply(Action::DismissThankYou, now());
        press(&mut kiosk, KeyCode::Enter);
        kiosk.apply(Action::ToggleAdmin, now());

        let screen = render(&kiosk);
        assert!(screen.contains("Ana Souza"));
        assert!(screen.contains("ana@exemplo.com"));
        assert!(screen.contains("Sim"));
    }

    #[test]
    fn bulk_export_requires_admin_view() {
        let mut kiosk = kiosk();
        fill_all(&mut kiosk);
        press(&mut kiosk, KeyCode::Enter);

        press(&mut kiosk, KeyCode::F(2));
        assert_eq!(kiosk.wizard().export_target().save_count(), 1);
        assert_eq!(kiosk.status(), None);

        // Admin on, but the thank-you screen has no table.
        kiosk.apply(Action::ToggleAdmin, now());
        press(&mut kiosk, KeyCode::F(2));
        assert_eq!(kiosk.wizard().export_target().save_count(), 1);

        // Nor does the hero.
        kiosk.apply(Action::DismissThankYou, now());
        press(&mut kiosk, KeyCode::F(3));
        assert_eq!(kiosk.wizard().export_target().save_count(), 1);
        assert_eq!(kiosk.status(), None);

        press(&mut kiosk, KeyCode::Enter);
        press(&mut kiosk, KeyCode::F(2));
        press(&mut kiosk, KeyCode::F(3));
        let saved = kiosk.wizard().export_target().saved();
        assert_eq!(saved.len(), 3);
        assert_eq!(saved[1].0, "leads_klassvough.csv");
        assert_eq!(saved[2].0, "leads_klassvough.txt");
        assert_eq!(kiosk.status(), Some("TXT exportado."));
    }

    #[test]
    fn escape_quits() {
        let mut kiosk = kiosk();
        press(&mut kiosk, KeyCode::Esc);
        assert!(kiosk.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut kiosk = kiosk();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        kiosk.handle_key(&key, now());
        assert_eq!(kiosk.wizard().phase(), Phase::NotStarted);
    }

    #[test]
    fn kiosk_app_builds_from_config() {
        let temp = tempfile::TempDir::new().unwrap();
        let app = KioskApp::new(BrandConfig::default().with_logo(temp.path().join("none.txt")))
            .with_admin(true)
            .with_export_dir(temp.path())
            .with_thank_you_delay(StdDuration::from_millis(500));
        let kiosk = app.kiosk();
        assert!(kiosk.wizard().is_admin());
        assert_eq!(kiosk.wizard().thank_you_delay(), chrono::Duration::milliseconds(500));
        assert_eq!(kiosk.wizard().export_target().dir(), temp.path());
    }

    #[test]
    fn error_types() {
        let err = RatatuiError::terminal("cannot enable raw mode", io::Error::other("no tty"));
        assert_eq!(err.to_string(), "Terminal error: cannot enable raw mode: no tty");
        assert!(matches!(err, RatatuiError::Terminal(_)));
    }

    #[test]
    fn theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Rgb(0x6F, 0x2D, 0xBD));
        assert_eq!(theme.text, Color::White);
    }
}
