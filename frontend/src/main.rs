mod app;
mod catalog;
mod config;
mod navbar;
mod not_found;
mod product;
mod route;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<app::App>::new().render();
}
