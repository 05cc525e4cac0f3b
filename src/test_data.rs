#[cfg(test)]
pub const DOC_JSON: &str = r##"{
  "meta": {
    "title": "Getting Started With Rust",
    "description": "A quick tour of the toolchain",
    "image": "/images/rust-tour.png",
    "publishedAt": "2024-05-12",
    "updatedAt": "2024-05-12",
    "author": "Ana Duarte",
    "isPublished": true,
    "tags": ["rust", "tooling"]
  },
  "content": [
    { "type": "heading", "level": 2, "text": "Why Rust" },
    { "type": "paragraph", "text": "Rust pairs low-level control with a friendly compiler." },
    { "type": "blockquote", "text": "The compiler is your pair programmer." },
    { "type": "codeblock", "language": "inline", "code": "cargo new hello" },
    { "type": "codeblock", "language": "rust", "code": "fn main() {}" },
    { "type": "list", "items": ["install rustup", "create a project", "run cargo test"] },
    { "type": "link", "text": "The Rust Book", "href": "https://doc.rust-lang.org/book/" },
    { "type": "table",
      "headers": ["Tool", "Purpose"],
      "rows": [["cargo", "build and test"], ["clippy", "lints"]] }
  ]
}"##;

#[cfg(test)]
pub const DOC_MDX: &str = r##"---
title: "Getting Started With Rust"
description: "A quick tour of the toolchain"
image: "/images/rust-tour.png"
publishedAt: "2024-05-12"
updatedAt: "2024-05-12"
author: "Ana Duarte"
isPublished: true
tags:
  - rust
  - tooling
---

## Why Rust

Rust pairs low-level control with a friendly compiler.

> The compiler is your pair programmer.

```inline
cargo new hello
```

fn main() {}

- install rustup
- create a project
- run cargo test

[The Rust Book](https://doc.rust-lang.org/book/)

Tool | Purpose
--- | ---
cargo | build and test
clippy | lints

"##;
