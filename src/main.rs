use dioxus::prelude::*;
use sure::ui::app::App;

fn main() {
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title("Software Uncertainties Repository")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1300.0, 800.0)),
            ),
        )
        .launch(App);
}
