use std::sync::Arc;
use std::thread;

use robotrules::Robots;

#[test]
fn query_across_threads() {
    let robots = Arc::new(Robots::parse(
        "user-agent: *\ndisallow: /private/\n\
         user-agent: FooBot\ndisallow: /\nallow: /public/\n",
    ));

    let mut handles = vec![];

    // Thread 1: FooBot allowed under /public/
    let r = Arc::clone(&robots);
    handles.push(thread::spawn(move || {
        r.one_agent_allowed_by_robots("FooBot", "/public/page")
    }));

    // Thread 2: FooBot denied elsewhere
    let r = Arc::clone(&robots);
    handles.push(thread::spawn(move || {
        !r.one_agent_allowed_by_robots("FooBot", "/anything")
    }));

    // Thread 3: other agents hit only the global group
    let r = Arc::clone(&robots);
    handles.push(thread::spawn(move || {
        !r.one_agent_allowed_by_robots("BarBot", "/private/x")
    }));

    // Thread 4: other agents allowed outside /private/
    let r = Arc::clone(&robots);
    handles.push(thread::spawn(move || {
        r.one_agent_allowed_by_robots("BarBot", "/open")
    }));

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn many_threads_many_queries() {
    let robots = Arc::new(Robots::parse(
        "user-agent: CrawlBot\ndisallow: /a/\nallow: /a/b/\n",
    ));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let r = Arc::clone(&robots);
            thread::spawn(move || {
                for j in 0..1000 {
                    let path = format!("/a/b/{i}/{j}");
                    assert!(r.one_agent_allowed_by_robots("CrawlBot", &path));
                    let path = format!("/a/{i}/{j}");
                    assert!(!r.one_agent_allowed_by_robots("CrawlBot", &path));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
