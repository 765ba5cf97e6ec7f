/// One view function per screen.
/// Each takes only the state it displays and emits `Message`s.
use iced::widget::{
    button, column, pick_list, row, scrollable, text, text_input, Column,
};
use iced::{Alignment, Element, Length};

use crate::state::catalog::Catalog;
use crate::state::data::{DietaryPreference, UserSession};
use crate::state::favorites::{Favorites, GroceryList};
use crate::state::timer::CookingTimer;
use crate::Message;

pub fn login(username: &str) -> Element<'_, Message> {
    column![
        text("Username:").size(20),
        text_input("Your name", username)
            .on_input(Message::UsernameChanged)
            .on_submit(Message::Login)
            .padding(10)
            .width(Length::Fixed(300.0)),
        button("Login").on_press(Message::Login).padding(10),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}

pub fn dietary_preference(selection: DietaryPreference) -> Element<'static, Message> {
    column![
        text("Select Dietary Preference:").size(20),
        pick_list(
            DietaryPreference::ALL,
            Some(selection),
            Message::DietSelected,
        )
        .padding(10),
        button("Save Dietary Preference")
            .on_press(Message::SaveDiet)
            .padding(10),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}

pub fn recipe_suggestion<'a>(
    session: &'a UserSession,
    catalog: &'a Catalog,
    timer: &'a CookingTimer,
    timer_input: &'a str,
) -> Element<'a, Message> {
    let diet = session
        .preference
        .map(|p| p.label())
        .unwrap_or("none set");
    let greeting = text(format!("Welcome, {} | Diet: {}", session.user_name(), diet)).size(14);

    let recipe: Element<'a, Message> = match catalog.current() {
        Some(recipe) => column![
            text(format!(
                "Recipe {} of {}",
                catalog.selected_index().map_or(0, |i| i + 1),
                catalog.len()
            ))
            .size(12),
            text(recipe.text()).size(18),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .into(),
        None if catalog.is_empty() => text("No recipes available.").size(18).into(),
        None => text("Suggested Recipe:").size(18).into(),
    };

    let navigation = row![
        button("Previous Recipe")
            .on_press(Message::PreviousRecipe)
            .padding(10),
        button("Next Recipe").on_press(Message::NextRecipe).padding(10),
    ]
    .spacing(10);

    let collect = row![
        button("Add to Favorites")
            .on_press(Message::AddToFavorites)
            .padding(10),
        button("Add to Grocery List")
            .on_press(Message::AddToGroceryList)
            .padding(10),
    ]
    .spacing(10);

    let cooking = row![
        text_input("Minutes", timer_input)
            .on_input(Message::TimerInputChanged)
            .on_submit(Message::StartTimer)
            .padding(10)
            .width(Length::Fixed(80.0)),
        button("Start Timer").on_press(Message::StartTimer).padding(10),
        button("Stop Timer")
            .on_press_maybe(timer.is_running().then_some(Message::StopTimer))
            .padding(10),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    column![
        greeting,
        recipe,
        navigation,
        collect,
        cooking,
        text(timer.display()).size(24),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}

pub fn favorites(favorites: &Favorites) -> Element<'_, Message> {
    let selected = favorites.selected_index();
    let entries = Column::with_children(favorites.items().iter().enumerate().map(
        |(i, recipe)| {
            let style = if selected == Some(i) {
                button::primary
            } else {
                button::secondary
            };
            button(text(recipe.text()))
                .on_press(Message::FavoriteSelected(i))
                .style(style)
                .width(Length::Fill)
                .padding(8)
                .into()
        },
    ))
    .spacing(6);

    let list: Element<'_, Message> = if favorites.is_empty() {
        text("No favorites yet.").into()
    } else {
        scrollable(entries).height(Length::Fill).into()
    };

    column![
        text("Favorite Recipes:").size(20),
        list,
        button("Remove from Favorites")
            .on_press(Message::RemoveFavorite)
            .padding(10),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}

pub fn grocery_list(groceries: &GroceryList) -> Element<'_, Message> {
    let list: Element<'_, Message> = if groceries.is_empty() {
        text("Nothing on the list yet.").into()
    } else {
        scrollable(
            Column::with_children(
                groceries
                    .items()
                    .iter()
                    .map(|item| text(format!("• {item}")).into()),
            )
            .spacing(6),
        )
        .height(Length::Fill)
        .into()
    };

    column![
        text("Grocery List:").size(20),
        list,
        button("Add to Grocery List")
            .on_press(Message::AddToGroceryList)
            .padding(10),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}

pub fn feedback(comment: &str) -> Element<'_, Message> {
    column![
        text("Provide Feedback:").size(20),
        text_input("Tell us what you think", comment)
            .on_input(Message::FeedbackChanged)
            .on_submit(Message::SubmitFeedback)
            .padding(10)
            .width(Length::Fixed(400.0)),
        button("Submit Feedback")
            .on_press(Message::SubmitFeedback)
            .padding(10),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}
