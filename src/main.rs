use iced::widget::{container, Column};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use std::time::Duration;
use tracing::{debug, info, warn};

mod config;
mod error;
mod state;
mod ui;

use config::Config;
use error::{AppError, ValidationError};
use state::catalog::Catalog;
use state::data::{DietaryPreference, UserSession};
use state::favorites::{Favorites, GroceryList};
use state::library::Library;
use state::screen::Screen;
use state::timer::{CookingTimer, TimerEvent, TIMES_UP};

/// Main application state
struct RecipeRecommender {
    /// The flat-file store
    library: Library,
    /// Who is logged in and their saved diet
    session: UserSession,
    catalog: Catalog,
    favorites: Favorites,
    groceries: GroceryList,
    timer: CookingTimer,
    /// Screen currently showing
    screen: Screen,
    /// Last notice for the user; each new one replaces it
    notice: Option<String>,

    // Form inputs
    username_input: String,
    diet_selection: DietaryPreference,
    timer_input: String,
    feedback_input: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    UsernameChanged(String),
    Login,
    DietSelected(DietaryPreference),
    SaveDiet,
    Navigate(Screen),
    NextRecipe,
    PreviousRecipe,
    AddToFavorites,
    AddToGroceryList,
    FavoriteSelected(usize),
    RemoveFavorite,
    TimerInputChanged(String),
    StartTimer,
    StopTimer,
    /// One second elapsed for the countdown with this generation
    Tick(u64),
    FeedbackChanged(String),
    SubmitFeedback,
}

impl RecipeRecommender {
    /// Create a new instance of the application, loading everything from disk
    fn new(config: Config) -> (Self, Task<Message>) {
        let library = Library::new(config.data_dir);
        let mut notice = None;

        let recipes = library.load_recipes().unwrap_or_else(|e| {
            warn!("⚠️  {e}: {:?}", std::error::Error::source(&e));
            notice = Some(e.to_string());
            Vec::new()
        });
        let favorites = library.load_favorites().unwrap_or_else(|e| {
            warn!("⚠️  {e}: {:?}", std::error::Error::source(&e));
            notice = Some(e.to_string());
            Vec::new()
        });
        let preference = library.load_preference();

        info!(
            "🍳 Recipe Recommender initialized with {} recipes, {} favorites",
            recipes.len(),
            favorites.len()
        );

        (
            RecipeRecommender {
                library,
                session: UserSession::with_preference(preference),
                catalog: Catalog::new(recipes),
                favorites: Favorites::new(favorites),
                groceries: GroceryList::default(),
                timer: CookingTimer::default(),
                screen: Screen::default(),
                notice,
                username_input: String::new(),
                diet_selection: preference.unwrap_or_default(),
                timer_input: "10".to_string(),
                feedback_input: String::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        if let Err(e) = self.handle(message) {
            match std::error::Error::source(&e) {
                Some(cause) => warn!("⚠️  {e} ({cause})"),
                None => debug!("Rejected input: {e}"),
            }
            self.notice = Some(e.to_string());
        }
        Task::none()
    }

    fn handle(&mut self, message: Message) -> Result<(), AppError> {
        match message {
            Message::UsernameChanged(value) => self.username_input = value,
            Message::Login => {
                if self.session.is_logged_in() {
                    return Ok(());
                }
                let name = self.username_input.trim().to_string();
                if name.is_empty() {
                    return Err(ValidationError::EmptyUsername.into());
                }

                info!("👤 {name} logged in");
                self.session.user = Some(name.clone());
                self.notice = None;
                self.go_to(self.screen.advance());
                self.library.record_login(&name)?;
            }
            Message::DietSelected(preference) => self.diet_selection = preference,
            Message::SaveDiet => {
                let preference = self.diet_selection;
                self.session.preference = Some(preference);
                self.go_to(self.screen.advance());
                self.notify(format!("Dietary preference saved: {preference}"));
                self.library.save_preference(preference)?;
            }
            Message::Navigate(target) => {
                let next = self.screen.navigate(target, self.session.is_logged_in());
                self.go_to(next);
            }
            Message::NextRecipe => {
                self.catalog.next();
            }
            Message::PreviousRecipe => {
                self.catalog.previous();
            }
            Message::AddToFavorites => {
                let recipe = self
                    .catalog
                    .current()
                    .cloned()
                    .ok_or(ValidationError::NoRecipeSelected)?;
                info!("⭐ Favorited {:?}", recipe.name());
                self.favorites.add(recipe.clone());
                self.notify("Recipe added to favorites.");
                self.library.record_favorite(&recipe)?;
            }
            Message::AddToGroceryList => {
                let recipe = self
                    .catalog
                    .current()
                    .ok_or(ValidationError::NoRecipeSelected)?;
                self.groceries.add(recipe);
                self.notify("Recipe added to grocery list.");
            }
            Message::FavoriteSelected(index) => self.favorites.select(index),
            Message::RemoveFavorite => {
                let removed = self
                    .favorites
                    .remove_selected()
                    .ok_or(ValidationError::NoFavoriteSelected)?;
                info!("🗑️  Unfavorited {:?}", removed.name());
                self.notify("Recipe removed from favorites.");
                self.library.record_favorite_removal(&removed)?;
            }
            Message::TimerInputChanged(value) => self.timer_input = value,
            Message::StartTimer => self.timer.start(&self.timer_input)?,
            Message::StopTimer => {
                if let Some(TimerEvent::Stopped) = self.timer.stop() {
                    self.notify("Timer stopped.");
                }
            }
            Message::Tick(generation) => {
                if let Some(TimerEvent::Expired) = self.timer.tick(generation) {
                    self.notify(TIMES_UP);
                }
            }
            Message::FeedbackChanged(value) => self.feedback_input = value,
            Message::SubmitFeedback => {
                let feedback = self.feedback_input.trim();
                if feedback.is_empty() {
                    return Err(ValidationError::EmptyFeedback.into());
                }
                self.library
                    .record_feedback(self.session.user_name(), feedback)?;
                self.feedback_input.clear();
                self.notify("Thank you for your feedback!");
            }
        }
        Ok(())
    }

    fn go_to(&mut self, screen: Screen) {
        if screen != self.screen {
            debug!("Screen {} -> {}", self.screen, screen);
            self.screen = screen;
        }
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let screen = match self.screen {
            Screen::Login => ui::screens::login(&self.username_input),
            Screen::DietaryPreference => ui::screens::dietary_preference(self.diet_selection),
            Screen::RecipeSuggestion => ui::screens::recipe_suggestion(
                &self.session,
                &self.catalog,
                &self.timer,
                &self.timer_input,
            ),
            Screen::Favorites => ui::screens::favorites(&self.favorites),
            Screen::GroceryList => ui::screens::grocery_list(&self.groceries),
            Screen::Feedback => ui::screens::feedback(&self.feedback_input),
        };

        let mut content = Column::new()
            .spacing(20)
            .padding(30)
            .align_x(Alignment::Center);

        if self.session.is_logged_in() {
            content = content.push(ui::nav_bar(self.screen));
        }

        content
            .push(
                container(screen)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .center_x(Length::Fill)
                    .center_y(Length::Fill),
            )
            .push(ui::notice(self.notice.as_deref()))
            .into()
    }

    /// One tick per second while a countdown is running.
    /// Keyed by generation so a restarted countdown gets a fresh timer.
    fn subscription(&self) -> Subscription<Message> {
        if self.timer.is_running() {
            iced::time::every(Duration::from_secs(1))
                .with(self.timer.generation())
                .map(|(generation, _)| Message::Tick(generation))
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(config::log_filter().as_str())
        .init();
    let config = Config::load();

    iced::application(
        "Recipe Recommender",
        RecipeRecommender::update,
        RecipeRecommender::view,
    )
    .theme(RecipeRecommender::theme)
    .subscription(RecipeRecommender::subscription)
    .centered()
    .run_with(move || RecipeRecommender::new(config))
}
