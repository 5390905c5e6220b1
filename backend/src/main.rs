//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

#[macro_use]
extern crate log;

mod config;
mod routes;

use warp::Filter;

use config::Config;

// Serves the clue page: index.html plus the wasm package built from frontend/.
// There is no API, the page does not talk to the server after loading.

#[tokio::main]
async fn main() {
    env_logger::init();
    let log = warp::log("clue::backend");

    let cfg_path = config::config_path();
    let cfg = match Config::load(cfg_path.as_deref()) {
        Ok(x) => x,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };

    let index = cfg.index_file();
    if !index.is_file() {
        warn!("{} not found, / will return 404", index.display());
    }

    let sockaddr = cfg.sockaddr();
    info!("Serving {} on http://{}", cfg.static_dir.display(), sockaddr);

    let routes = routes::routes(&cfg).with(log);
    warp::serve(routes).run(sockaddr).await;
}
