//! Markdown and plain-text bodies for forum content.

use crate::faker::Faker;

const EMPHASIS: &str = "*italics* and _italics_
**strong emphasis** and __strong emphasis__
**combined _emphasis_**
~~strikethrough~~
";

const LINKS: &str = "[inline link](https://google.com)
[inline with title](https://google.com \"Google's Homepage\")
[reference link][reddit]
or use [twitter]

[reddit]: https://reddit.com
[twitter]: https://twitter.com
";

const INLINE_CODE: &str = "inline `code` with `backticks`";

const CODE_BLOCKS: &str = "```javascript
function add(one, other) {
  return one + other
}
```

```
$ exec \"$SHELL\"
```
";

const IMAGES: &str = "![inline image](https://imgur.com/HFD0Sy0 \"inline image title\")";

const FOOTNOTES: &str = "simple footnotes[^1]\n\n\n[^1]: my references.";

const TABLES: &str = "
| Tables        | Are           | Cool  |
| ------------- |:-------------:| -----:|
| col 3 is      | right-aligned | $1600 |
| col 2 is      | centered      |   $12 |
| zebra stripes | are neat      |    $1 |
";

const BLOCK_QUOTES: &str = "> quote this text please\n\nbreak\n\n> another quote\n";

const INLINE_HTML: &str = "
<dl>
  <dt>Definition list</dt>
  <dd>A definition.</dd>

  <dt>Definition list</dt>
  <dd>Another definition.</dd>
</dl>
";

const RULES: &str = "---\n\n***\n\n___\n";

/// Long markdown document exercising most CommonMark and GFM constructs.
///
/// Headers one to six, emphasis, an ordered list of fake titles, links,
/// inline and fenced code, an image, a footnote, a table, block quotes,
/// inline HTML and horizontal rules, joined by blank lines.
pub fn generate_markdown_content(faker: &mut Faker) -> String {
    let headers: String = (1..=6)
        .map(|level| format!("{} H{level}\n", "#".repeat(level)))
        .collect();
    let list: String = (1..=3)
        .map(|index| format!("{index}. {}\n", faker.title()))
        .collect();

    [
        headers.as_str(),
        EMPHASIS,
        list.as_str(),
        LINKS,
        INLINE_CODE,
        CODE_BLOCKS,
        IMAGES,
        FOOTNOTES,
        TABLES,
        BLOCK_QUOTES,
        INLINE_HTML,
        RULES,
    ]
    .join("\n")
}

/// A quoted lorem paragraph followed by a plain reply paragraph.
pub fn generate_short_blockquote(faker: &mut Faker) -> String {
    let quote = faker.paragraph(20);
    let reply = faker.paragraph(10);
    format!("> {quote}\n\n{reply}")
}

/// Lorem paragraph with commas removed, used for ordinary post bodies.
pub fn generate_plain_content(faker: &mut Faker, sentences: usize) -> String {
    faker.paragraph(sentences).replace(',', "")
}
