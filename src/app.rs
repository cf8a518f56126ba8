use std::sync::Arc;

use iced::Task;
use log::debug;

use crate::api::ApiClient;
use crate::application::LinkResolver;
use crate::config::AppConfig;
use crate::domain::{AppError, DownloadLink};
use crate::navigation::BrowserNavigator;
use crate::ui::{ResolverMessage, ResolverView};

pub struct ResolverApp {
    view: ResolverView,
    resolver: LinkResolver,
}

impl ResolverApp {
    pub fn new(config: AppConfig) -> Self {
        let api_client = ApiClient::new(config.api);
        let resolver = LinkResolver::new(Arc::new(api_client), Arc::new(BrowserNavigator));

        Self::with_resolver(resolver)
    }

    pub fn with_resolver(resolver: LinkResolver) -> Self {
        Self {
            view: ResolverView::default(),
            resolver,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(ResolverMessage),
    /// Settlement of the outbound request
    DownloadLinkResolved(Result<DownloadLink, AppError>),
}

pub fn update(app: &mut ResolverApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => {
            app.view.update(ui_msg.clone());

            if let ResolverMessage::SubmitPressed = ui_msg {
                // Enter in the text field bypasses the disabled button
                if app.view.form.state.is_in_flight() {
                    debug!("Ignoring submit while a request is in flight");
                    return Task::none();
                }

                if let Some(track_id) = app.resolver.begin(&mut app.view.form) {
                    let resolver = app.resolver.clone();

                    // iced Task::perform runs in the background tokio executor
                    return Task::perform(
                        async move { resolver.resolve(track_id).await },
                        Message::DownloadLinkResolved,
                    );
                }
            }
        }
        Message::DownloadLinkResolved(outcome) => {
            app.resolver.finish(&mut app.view.form, outcome);
        }
    }
    Task::none()
}

pub fn view(app: &ResolverApp) -> iced::Element<'_, Message> {
    app.view.view().map(Message::UiMessage)
}
