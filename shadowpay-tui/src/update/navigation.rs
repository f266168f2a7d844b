use crate::command::Command;
use crate::message::{Key, NavigationMessage};
use crate::model::{App, InputForm, MenuAction, View};

/// 未配置客户端时进入业务视图的提示
pub const CLIENT_REQUIRED: &str = "Please set API key in Settings first";

/// 菜单视图下的按键处理
pub(super) fn update(app: &mut App, key: Key) -> Option<Command> {
    let nav = NavigationMessage::from_key(key)?;

    match nav {
        NavigationMessage::SelectPrevious => {
            app.cursor = app.cursor.saturating_sub(1);
            None
        }

        NavigationMessage::SelectNext => {
            if app.cursor < app.items().len().saturating_sub(1) {
                app.cursor += 1;
            }
            None
        }

        NavigationMessage::Confirm => confirm(app),

        NavigationMessage::Back => {
            if app.view != View::MainMenu {
                app.navigate(View::MainMenu);
            }
            None
        }

        NavigationMessage::Quit => {
            if app.view == View::MainMenu {
                app.should_quit = true;
            } else {
                app.navigate(View::MainMenu);
            }
            None
        }
    }
}

/// 确认当前菜单项
fn confirm(app: &mut App) -> Option<Command> {
    let item = app.selected_item()?;

    match item.action {
        MenuAction::Enter(view) => {
            if view.requires_client() && !app.session.is_connected() {
                app.set_error(CLIENT_REQUIRED);
            } else {
                app.navigate(view);
            }
            None
        }

        MenuAction::Exit => {
            app.should_quit = true;
            None
        }

        MenuAction::Form(spec) => {
            let Some(client) = app.session.client.clone() else {
                app.set_error(CLIENT_REQUIRED);
                return None;
            };
            let submit = spec.submit;
            let form = InputForm::new(spec.title, spec.fields, move |values| {
                submit(client, values)
            });
            app.open_form(form);
            None
        }

        MenuAction::Run(run) => {
            let Some(client) = app.session.client.clone() else {
                app.set_error(CLIENT_REQUIRED);
                return None;
            };
            Some(run(client))
        }

        MenuAction::Notice(text) => {
            app.set_error(text);
            None
        }

        MenuAction::Back => {
            app.navigate(View::MainMenu);
            None
        }
    }
}
