use robotrules::{GroupAssembler, ParseHandler, Robots};

/// A handler that wraps the default assembler but also collects the
/// directives the default parser throws away.
struct Observer {
    inner: GroupAssembler,
    unknown: Vec<(usize, String, String)>,
}

impl ParseHandler for Observer {
    fn start(&mut self) {
        self.inner.start();
    }
    fn end(&mut self) {
        self.inner.end();
    }
    fn user_agent(&mut self, line: usize, value: &str) {
        self.inner.user_agent(line, value);
    }
    fn allow(&mut self, line: usize, value: &str) {
        self.inner.allow(line, value);
    }
    fn disallow(&mut self, line: usize, value: &str) {
        self.inner.disallow(line, value);
    }
    fn sitemap(&mut self, line: usize, value: &str) {
        self.inner.sitemap(line, value);
    }
    fn unknown(&mut self, line: usize, key: &str, value: &str) {
        self.unknown.push((line, key.to_owned(), value.to_owned()));
    }
}

fn main() {
    let body = "user-agent: *\n\
                crawl-delay: 10\n\
                disallow: /tmp/\n\
                sitemap: https://example.com/sitemap.xml\n\
                sitemap: https://example.com/news.xml\n";

    let robots = Robots::parse(body);
    println!("sitemaps:");
    for url in robots.sitemaps() {
        println!("  {url}");
    }

    let mut observer = Observer {
        inner: GroupAssembler::new(),
        unknown: Vec::new(),
    };
    robotrules::scan(body, &mut observer);
    println!("unrecognized directives:");
    for (line, key, value) in &observer.unknown {
        println!("  line {line}: {key} = {value}");
    }
}
