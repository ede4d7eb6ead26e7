use lunar_url::UrlParser;

fn main() {
    // Decompose a URL, tolerating the backslash
    let mut parser = UrlParser::new();
    parser.parse("https://user@example.com:8080\\path?query=value&query=other#hash");

    println!("Scheme: {}", parser.scheme()); // https:
    println!("User info: {}", parser.user_info()); // user
    println!("Host: {}", parser.host()); // example.com
    println!("Port: {}", parser.port()); // 8080
    println!("Path: {}", parser.absolute_path()); // /path
    println!("Path and query: {}", parser.path_and_query()); // /path?query=value&query=other
    println!("Fragment: {}", parser.fragment()); // #hash
    println!("query: {:?}", parser.query_store().get("query")); // Some(Multi(["value", "other"]))
}
