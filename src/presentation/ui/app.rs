//! Main application orchestrator.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};
use tracing::{debug, info};

use crate::application::{Intent, PlannerSession};
use crate::domain::catalog::{VenueCatalog, venue_cap};
use crate::domain::entities::{PeopleCount, Section, ViewMode, format_cost};
use crate::domain::keybinding::Action;
use crate::infrastructure::config::{AppConfig, UiConfig};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{Focus, SelectionScreen, SummaryScreen};
use crate::presentation::widgets::{FooterBar, HeaderBar, StatusBar};

const MAX_PEOPLE_DIGITS: usize = 6;
const MIN_PEOPLE_WARNING: &str = "At least 1 person must attend";

/// Terminal front end over one planning session.
pub struct App {
    session: PlannerSession,
    commands: CommandRegistry,
    events: EventHandler,
    theme: Theme,
    ui: UiConfig,
    focus: Focus,
    people_edit: Option<String>,
    status: StatusBar,
}

#[allow(missing_docs)]
impl App {
    #[must_use]
    pub fn new(session: PlannerSession, config: &AppConfig) -> Self {
        Self {
            session,
            commands: CommandRegistry::with_overrides(&config.keybindings),
            events: EventHandler::new(),
            theme: Theme::new(&config.theme.accent_color),
            ui: config.ui.clone(),
            focus: Focus::default(),
            people_edit: None,
            status: StatusBar::new(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &PlannerSession {
        &self.session
    }

    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    #[must_use]
    pub fn people_edit(&self) -> Option<&str> {
        self.people_edit.as_deref()
    }

    /// # Errors
    /// Returns error if drawing or reading terminal events fails.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!("Starting planner");
        terminal.draw(|frame| self.render(frame))?;

        loop {
            let Some(event) = self.events.poll()? else {
                continue;
            };

            match self.handle_event(&event) {
                EventResult::Exit => break,
                EventResult::Consumed => {
                    terminal.draw(|frame| self.render(frame))?;
                }
                EventResult::Continue => {}
            }
        }

        let summary = self.session.summary();
        info!(
            grand_total = summary.grand_total,
            lines = summary.lines.len(),
            "Application exiting normally"
        );
        Ok(())
    }

    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        if matches!(event, Event::Resize(..)) {
            return EventResult::Consumed;
        }

        match EventHandler::key_press(event) {
            Some(key) => self.handle_key(key),
            None => EventResult::Continue,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return EventResult::Exit;
        }

        if self.people_edit.is_some() {
            return self.handle_people_edit(key);
        }

        match self.commands.find_action(key) {
            Some(action) => self.dispatch(action),
            None => EventResult::Continue,
        }
    }

    fn dispatch(&mut self, action: Action) -> EventResult {
        debug!(?action, "Dispatching action");

        match action {
            Action::Quit => EventResult::Exit,
            Action::ToggleSummary => {
                self.session.apply(Intent::ToggleSummary);
                self.status = StatusBar::new();
                EventResult::Consumed
            }
            Action::JumpToVenue => self.jump_to(Section::Venue),
            Action::JumpToAddons => self.jump_to(Section::Addons),
            Action::JumpToMeals => self.jump_to(Section::Meals),
            Action::Cancel => {
                if self.session.mode() == ViewMode::Summarizing {
                    self.session.apply(Intent::ToggleSummary);
                    EventResult::Consumed
                } else {
                    EventResult::Exit
                }
            }
            _ if self.session.mode() == ViewMode::Summarizing => EventResult::Continue,
            Action::NextSection => self.focus_section(self.focus.section.next()),
            Action::PreviousSection => self.focus_section(self.focus.section.previous()),
            Action::NavigateUp => self.move_cursor(-1),
            Action::NavigateDown => self.move_cursor(1),
            Action::Increment => self.change_quantity(true),
            Action::Decrement => self.change_quantity(false),
            Action::ToggleMeal => self.toggle_meal(),
            Action::IncreasePeople => self.step_people(1),
            Action::DecreasePeople => self.step_people(-1),
            Action::EditPeople => {
                self.people_edit = Some(self.session.people().to_string());
                self.focus_section(Section::Meals)
            }
        }
    }

    fn jump_to(&mut self, section: Section) -> EventResult {
        self.session.apply(Intent::Navigate(section));
        self.focus_section(section)
    }

    fn focus_section(&mut self, section: Section) -> EventResult {
        let last = self.session.section_len(section).saturating_sub(1);
        self.focus = Focus {
            section,
            index: self.focus.index.min(last),
        };
        EventResult::Consumed
    }

    fn move_cursor(&mut self, delta: isize) -> EventResult {
        let len = self.session.section_len(self.focus.section);
        if len == 0 {
            return EventResult::Continue;
        }
        let index = self.focus.index.saturating_add_signed(delta).min(len - 1);
        if index == self.focus.index {
            return EventResult::Continue;
        }
        self.focus.index = index;
        EventResult::Consumed
    }

    fn change_quantity(&mut self, increment: bool) -> EventResult {
        let index = self.focus.index;
        let intent = match (self.focus.section, increment) {
            (Section::Venue, true) => Intent::IncrementVenue(index),
            (Section::Venue, false) => Intent::DecrementVenue(index),
            (Section::Addons, true) => Intent::IncrementAddon(index),
            (Section::Addons, false) => Intent::DecrementAddon(index),
            (Section::Meals, _) => {
                let selected = self
                    .session
                    .meals()
                    .get(index)
                    .is_some_and(|meal| meal.is_selected());
                if selected == increment {
                    return EventResult::Continue;
                }
                Intent::ToggleMeal(index)
            }
        };

        if self.session.apply(intent) {
            self.status = StatusBar::new();
        } else if increment && self.focus.section == Section::Venue {
            self.status = StatusBar::warning(cap_message(self.session.venue(), index));
        }
        EventResult::Consumed
    }

    fn toggle_meal(&mut self) -> EventResult {
        if self.focus.section != Section::Meals {
            return EventResult::Continue;
        }
        self.session.apply(Intent::ToggleMeal(self.focus.index));
        EventResult::Consumed
    }

    fn step_people(&mut self, delta: i64) -> EventResult {
        let target = i64::from(self.session.people().get()) + delta;
        self.session.apply(Intent::SetPeople(target));
        self.status = if target < 1 {
            StatusBar::warning(MIN_PEOPLE_WARNING)
        } else {
            StatusBar::new()
        };
        EventResult::Consumed
    }

    fn handle_people_edit(&mut self, key: KeyEvent) -> EventResult {
        let Some(buffer) = self.people_edit.as_mut() else {
            return EventResult::Continue;
        };

        match key.code {
            KeyCode::Char(digit @ '0'..='9') => {
                if buffer.len() < MAX_PEOPLE_DIGITS {
                    buffer.push(digit);
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let text = buffer.clone();
                self.people_edit = None;
                self.commit_people(&text);
            }
            KeyCode::Esc => {
                self.people_edit = None;
            }
            _ => return EventResult::Continue,
        }
        EventResult::Consumed
    }

    fn commit_people(&mut self, text: &str) {
        if PeopleCount::parse(text).is_none() {
            self.status = StatusBar::warning(format!("Not a number: {text:?}"));
            return;
        }
        self.session.set_people_text(text);
        // the field only holds digits, so all zeros is the only value below one
        self.status = if text.trim().chars().all(|c| c == '0') {
            StatusBar::warning(MIN_PEOPLE_WARNING)
        } else {
            StatusBar::info(format!("Number of people set to {}", self.session.people()))
        };
    }

    fn render(&self, frame: &mut Frame) {
        let [header_area, body_area, status_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let mode = self.session.mode();
        frame.render_widget(
            HeaderBar::new(&self.theme, mode).active(self.focus.section),
            header_area,
        );

        match mode {
            ViewMode::Selecting => frame.render_widget(
                SelectionScreen::new(&self.session, &self.theme, self.focus)
                    .people_edit(self.people_edit.as_deref())
                    .show_remaining(self.ui.show_remaining)
                    .show_image_refs(self.ui.show_image_refs),
                body_area,
            ),
            ViewMode::Summarizing => {
                let summary = self.session.summary();
                frame.render_widget(SummaryScreen::new(&summary, &self.theme), body_area);
            }
        }

        let grand_total = self.session.aggregator().grand_total();
        let status = self
            .status
            .clone()
            .right(format!("Total: {} ", format_cost(grand_total)));
        frame.render_widget(&status, status_area);

        let bindings = self.commands.footer_bindings(mode);
        frame.render_widget(FooterBar::new(&bindings, &self.theme), footer_area);
    }
}

fn cap_message(venue: &VenueCatalog, index: usize) -> String {
    match venue.get(index) {
        Some(item) => {
            let cap = item.max_quantity().unwrap_or_else(|| venue_cap(item.name()));
            format!("{} is limited to {cap}", item.name())
        }
        None => String::new(),
    }
}
