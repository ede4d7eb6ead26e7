/// Prints every field of each URL given on the command line, the way a
/// display layer would render them.
///
/// cargo run --example inspect -- "http://[::1]:80/a?x=1&x=2#f"
///
/// Set `RUST_LOG=lunar_url=trace` to see parser diagnostics.
use lunar_url::UrlParser;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut parser = UrlParser::new();
    for input in std::env::args().skip(1) {
        parser.parse(&input);

        println!("Scheme : {}", parser.scheme());
        println!("Hostname : {}", parser.host());
        println!("Path : {}", parser.absolute_path());
        println!("PathAndQuery : {}", parser.path_and_query());
        println!("UserInfo : {}", parser.user_info());
        println!("Port : {}", parser.port());
        println!("Fragment : {}", parser.fragment());

        for (key, value) in parser.query_store().iter() {
            // Multi-values print joined with ", "
            println!("{key}={value}");
        }
        println!();
    }
}
