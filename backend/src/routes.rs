//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use warp::Filter;

use crate::config::Config;

/// All routes: there is nothing but static files
///
///  / -> index.html
///  /pkg/<..> -> wasm package (js glue and .wasm)
pub fn routes(cfg: &Config) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // route: /
    let index_r = warp::get()
        .and(warp::path::end())
        .and(warp::fs::file(cfg.index_file()));

    // route: /pkg
    let pkg_r = warp::path("pkg").and(warp::fs::dir(cfg.pkg_dir()));

    index_r.or(pkg_r)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;
    use warp::http::StatusCode;

    const INDEX: &str = "<html><body>clue</body></html>";

    fn mk_static_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("clue-backend-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(dir.join("pkg")).unwrap();
        std::fs::write(dir.join("index.html"), INDEX).unwrap();
        std::fs::write(dir.join("pkg").join("package.js"), "export default 0;").unwrap();
        dir
    }

    fn mk_config(name: &str) -> Config {
        Config {
            static_dir: mk_static_dir(name),
            ..Config::default()
        }
    }

    fn rm_static_dir(cfg: &Config) {
        std::fs::remove_dir_all(&cfg.static_dir).unwrap();
    }

    #[tokio::test]
    async fn index() {
        let cfg = mk_config("index");
        let filter = routes(&cfg);
        let res = warp::test::request().path("/").reply(&filter).await;
        rm_static_dir(&cfg);
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.body().as_ref(), INDEX.as_bytes());
        assert!(!cfg.static_dir.exists());
    }

    #[tokio::test]
    async fn pkg() {
        let cfg = mk_config("pkg");
        let filter = routes(&cfg);
        let res = warp::test::request().path("/pkg/package.js").reply(&filter).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.body().as_ref(), b"export default 0;");

        let res = warp::test::request().path("/pkg/missing.wasm").reply(&filter).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        rm_static_dir(&cfg);
    }

    #[tokio::test]
    async fn no_api() {
        let cfg = mk_config("noapi");
        let filter = routes(&cfg);
        for path in ["/hello", "/games", "/creategame"].iter() {
            let res = warp::test::request().path(path).reply(&filter).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND, "path: {}", path);
        }
        rm_static_dir(&cfg);
    }
}
