use crate::app::App;

mod api;
mod app;
mod components;
mod workflow;

fn main() {
    yew::Renderer::<App>::new().render();
}
