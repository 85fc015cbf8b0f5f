pub const SYSTEM_INSTRUCTIONS: &str =
    "Act as a Linux server running a REST API. You reply with only valid JSON.";

pub const PREFIX_HEADER: &str =
    "\nChoose the most applicable prefix for your commit title from the following list:\n";

/// Rendered with the English name of the requested language in place of `{language}`.
pub const LOCALE_TEMPLATE: &str = r#"
Based on the diff below, generate a commit title and message, both in {language}. Make sure the title is a good, concise commit
title (preferably less than 73 characters). The commit message can be longer and more detailed. Your entire response
will be parsed as JSON, so make sure it is valid with a title and message key: don't include anything but JSON in your
reply.
"#;

pub const CONVENTIONAL_PREFIXES: &[(&str, &str)] = &[
    ("feat:", "adds or removes a new feature"),
    ("fix:", "fixes a bug"),
    ("refactor:", "rewrites/restructures code, however doesn't change any API behaviour"),
    ("perf:", "special refactor that improves performance"),
    ("style:", "not affecting any meaning (white-space, formatting, missing semicolons, etc.)"),
    ("test:", "adds missing tests or corrects existing tests"),
    ("docs:", "affects documentation only"),
    ("build:", "affects build components like build tool, ci pipeline, dependencies, project version, etc."),
    ("ops:", "affects operational components like infrastructure, deployment, backup, recovery, etc."),
    ("chore:", "miscellaneous changes e.g. modifying .gitignore"),
];

pub const GITMOJI_PREFIXES: &[(&str, &str)] = &[
    ("🎨", "improves structure/format of the code"),
    ("⚡️", "improves performance"),
    ("🔥", "removes code or files"),
    ("🐛", "fixes a bug"),
    ("🚑️", "critical hotfix"),
    ("✨", "introduces new features"),
    ("📝", "adds or updates documentation"),
    ("🚀", "deploys stuff"),
    ("💄", "adds or updates the UI and style files"),
    ("🎉", "begins a project"),
    ("✅", "adds, updates, or passes tests"),
    ("🔒️", "fixes security or privacy issues"),
    ("🔐", "adds or updates secrets"),
    ("🔖", "release/version tags"),
    ("🚨", "fixes compiler/linter warnings"),
    ("🚧", "work in progress"),
    ("💚", "fixes CI build"),
    ("⬇️", "downgrades dependencies"),
    ("⬆️", "upgrades dependencies"),
    ("📌", "pins dependencies to specific versions"),
    ("👷", "adds or updates CI build system"),
    ("📈", "adds or updates analytics or track code"),
    ("♻️", "refactors code"),
    ("➕", "adds a dependency"),
    ("➖", "removes a dependency"),
    ("🔧", "adds or updates configuration files"),
    ("🔨", "adds or updates development scripts"),
    ("🌐", "internationalization and localization"),
    ("✏️", "fixes typos"),
    ("💩", "adds bad code that needs to be improved"),
    ("⏪️", "reverts changes"),
    ("🔀", "merges branches"),
    ("📦️", "adds or updates compiled files or packages"),
    ("👽️", "updates code due to external API changes"),
    ("🚚", "moves or renames resources (e.g.: files, paths, routes)"),
    ("📄", "adds or update license"),
    ("💥", "introduces breaking changes"),
    ("🍱", "adds or updates assets"),
    ("♿️", "improves accessibility"),
    ("💡", "adds or updates comments in source code"),
    ("🍻", "writes code drunkenly"),
    ("💬", "adds or updates text and literals"),
    ("🗃️", "performs database related changes"),
    ("🔊", "adds or updates logs"),
    ("🔇", "removes logs"),
    ("👥", "adds or updates contributor(s)"),
    ("🚸", "improves user experience / usability"),
    ("🏗️", "makes architectural changes"),
    ("📱", "works on responsive design"),
    ("🤡", "mocks things"),
    ("🥚", "adds or updates an easter egg"),
    ("🙈", "adds or updates a .gitignore file"),
    ("📸", "adds or updates snapshots"),
    ("⚗️", "performs experiments"),
    ("🔍️", "improves SEO"),
    ("🏷️", "adds or updates types"),
    ("🌱", "adds or updates seed files"),
    ("🚩", "adds, updates, or removes feature flags"),
    ("🥅", "catches errors"),
    ("💫", "adds or updates animations and transitions"),
    ("🗑️", "deprecates code that needs to be cleaned up"),
    ("🛂", "works on code related to authorization, roles and permissions"),
    ("🩹", "simple fix for a non-critical issue"),
    ("🧐", "data exploration/inspection"),
    ("⚰️", "removes dead code"),
    ("🧪", "adds a failing test"),
    ("👔", "adds or updates business logic"),
    ("🩺", "adds or updates healthcheck"),
    ("🧱", "infrastructure related changes"),
    ("🧑‍💻", "improves developer experience"),
    ("💸", "adds sponsorships or money related infrastructure"),
    ("🧵", "adds or updates code related to multithreading or concurrency"),
    ("🦺", "adds or updates code related to validation"),
];
