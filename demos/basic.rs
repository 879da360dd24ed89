use robotrules::Robots;

fn main() {
    let robots = Robots::parse(
        "user-agent: *\n\
         disallow: /private/\n\n\
         user-agent: FooBot\n\
         disallow: /\n\
         allow: /public/\n",
    );

    println!("{robots}");

    for (agent, path) in [
        ("FooBot", "/public/index.html"),
        ("FooBot", "/secret"),
        ("BarBot", "/private/x"),
        ("BarBot", "/anything-else"),
    ] {
        let report = robots.query(&[agent], path);
        println!("{agent} -> {path}: {report}");
    }
}
