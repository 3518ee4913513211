pub const LOGO: &str = r#"
 _            _       _           _
| |_ ___   __| | ___ | |__   ___ | |_
| __/ _ \ / _` |/ _ \| '_ \ / _ \| __|
| || (_) | (_| | (_) | |_) | (_) | |_
 \__\___/ \__,_|\___/|_.__/ \___/ \__|
"#;

pub fn show_logo(bot_name: &str, commands: usize) {
	let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

	let info = format!(
		r#"Version:     v{} ({}, built {})
Bot:         {}
Commands:    {}
Started:     {}"#,
		env!("CARGO_PKG_VERSION"),
		env!("TODOBOT_GIT_HASH"),
		env!("TODOBOT_BUILD_DATE"),
		bot_name,
		commands,
		now
	);

	println!("{}\n{}\n", LOGO.trim_end(), info);
}
