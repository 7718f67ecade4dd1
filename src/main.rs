mod args;
mod entry;
mod error;
mod logger;
mod pacer;
mod press;
mod scheduler;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
