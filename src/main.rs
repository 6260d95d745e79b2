mod allocator;
mod app;
mod ui;

use crate::app::App;

fn main() -> anyhow::Result<()> {
    App::init()?.execute()
}
