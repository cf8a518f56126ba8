use iced::{
    widget::{button, column, text, text_input, Space},
    Color, Element, Length,
};

use crate::domain::{RequestState, SubmitForm};

const ERROR_COLOR: Color = Color {
    r: 0.94,
    g: 0.27,
    b: 0.27,
    a: 1.0,
};

/// Main view state
#[derive(Default)]
pub struct ResolverView {
    pub form: SubmitForm,
}

#[derive(Debug, Clone)]
pub enum ResolverMessage {
    UrlChanged(String),
    SubmitPressed,
}

impl ResolverView {
    pub fn update(&mut self, message: ResolverMessage) {
        match message {
            ResolverMessage::UrlChanged(url) => {
                self.form.input = url;
            }
            ResolverMessage::SubmitPressed => {
                // Will be handled by the app
            }
        }
    }

    fn status_line(&self) -> Element<'_, ResolverMessage> {
        match &self.form.state {
            RequestState::Idle => text("Paste a Spotify track link to download it")
                .size(14)
                .into(),
            RequestState::InFlight => text("Resolving download link...").size(14).into(),
            RequestState::Error(message) => text(message.as_str())
                .size(14)
                .color(ERROR_COLOR)
                .into(),
        }
    }

    pub fn view(&self) -> Element<'_, ResolverMessage> {
        let submit = button(if self.form.state.is_in_flight() {
            "Downloading..."
        } else {
            "Download"
        })
        .on_press_maybe(self.form.can_submit().then_some(ResolverMessage::SubmitPressed))
        .padding([10, 20]);

        column![
            text("Spotify Downloader").size(32),
            Space::new().height(Length::Fixed(20.0)),
            text("Track URL:").size(16),
            text_input("https://open.spotify.com/track/...", &self.form.input)
                .on_input(ResolverMessage::UrlChanged)
                .on_submit(ResolverMessage::SubmitPressed)
                .padding(10),
            Space::new().height(Length::Fixed(10.0)),
            self.status_line(),
            Space::new().height(Length::Fixed(20.0)),
            submit,
        ]
        .padding(20)
        .spacing(10)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_changed_updates_input() {
        let mut view = ResolverView::default();
        view.update(ResolverMessage::UrlChanged("https://open.spotify.com/track/abc".into()));
        assert_eq!(view.form.input, "https://open.spotify.com/track/abc");
        assert!(view.form.can_submit());
    }

    #[test]
    fn test_submit_pressed_leaves_form_alone() {
        let mut view = ResolverView::default();
        view.update(ResolverMessage::UrlChanged("x".into()));
        view.update(ResolverMessage::SubmitPressed);
        assert_eq!(view.form.input, "x");
        assert_eq!(view.form.state, RequestState::Idle);
    }
}
