//! Example demonstrating parameter name lookup against a generated
//! javadoc tree.
//!
//! Builds a tiny javadoc root in a temporary directory, then runs the
//! lookups a reflection-based caller would.
//!
//! Run with: cargo run --example lookup_demo

use std::fs;

use jpn::{Callable, Javadoc, OnMissing};

const WIDGET_PAGE: &str = r#"
<a name="constructor.detail"><!-- --></a>
<h3>Constructor Detail</h3>
<h4>Widget</h4>
<pre>public&nbsp;Widget(int&nbsp;capacity)</pre>
<a name="method.detail"><!-- --></a>
<h3>Method Detail</h3>
<h4>process</h4>
<pre>public&nbsp;void&nbsp;process(java.lang.String&nbsp;text)</pre>
<h4>process</h4>
<pre>public&nbsp;void&nbsp;process(java.lang.String&nbsp;text,
                    int&nbsp;repeat)</pre>
"#;

fn main() {
    println!("=== Javadoc Parameter Name Demo ===\n");

    let root = std::env::temp_dir().join("jpn-lookup-demo");
    fs::create_dir_all(root.join("com/example")).expect("create demo javadoc tree");
    fs::write(root.join("package-list"), "com.example\n").expect("write package-list");
    fs::write(root.join("com/example/Widget.html"), WIDGET_PAGE).expect("write page");

    let javadoc = Javadoc::open(&root).expect("open demo javadoc root");
    println!("1️⃣  Opened javadoc root: {}", javadoc.root());

    // Overloads are disambiguated by parameter type sequence
    println!("\n2️⃣  Looking up process(java.lang.String,int):");
    let two_arg = Callable::method(
        "com.example.Widget",
        "process",
        vec!["java.lang.String".to_string(), "int".to_string()],
    );
    match javadoc.parameter_names(&two_arg) {
        Ok(names) => println!("   ✓ Names: {:?}", names),
        Err(e) => println!("   ❌ {}", e),
    }

    println!("\n3️⃣  Looking up the one-argument overload:");
    let one_arg = Callable::method(
        "com.example.Widget",
        "process",
        vec!["java.lang.String".to_string()],
    );
    match javadoc.parameter_names(&one_arg) {
        Ok(names) => println!("   ✓ Names: {:?}", names),
        Err(e) => println!("   ❌ {}", e),
    }

    println!("\n4️⃣  Constructor lookup:");
    let ctor = Callable::constructor("com.example.Widget", vec!["int".to_string()]);
    match javadoc.parameter_names(&ctor) {
        Ok(names) => println!("   ✓ Names: {:?}", names),
        Err(e) => println!("   ❌ {}", e),
    }

    println!("\n5️⃣  A member that is not documented, strict vs graceful:");
    let missing = Callable::method("com.example.Widget", "shutdown", vec![]);
    match javadoc.lookup(&missing, OnMissing::Raise) {
        Ok(names) => println!("   strict: {:?}", names),
        Err(e) => println!("   strict: error — {}", e),
    }
    match javadoc.lookup(&missing, OnMissing::Empty) {
        Ok(names) => println!("   graceful: {:?}", names),
        Err(e) => println!("   graceful: error — {}", e),
    }

    println!("\n=== Demo Complete ===");
}
