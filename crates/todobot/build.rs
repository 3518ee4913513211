#![allow(clippy::disallowed_macros)]

use std::process::Command;

fn main() {
	// Version details shown in the startup banner
	let git_hash = git(&["rev-parse", "--short", "HEAD"]);
	let dirty = if git_hash == "unknown" || git(&["status", "--porcelain"]).is_empty() {
		""
	} else {
		"-dirty"
	};
	println!("cargo:rustc-env=TODOBOT_GIT_HASH={}{}", git_hash, dirty);

	println!("cargo:rustc-env=TODOBOT_BUILD_DATE={}", build_date());

	println!("cargo:rerun-if-changed=../../.git/HEAD");
	println!("cargo:rerun-if-changed=../../.git/refs");
}

fn git(args: &[&str]) -> String {
	run("git", args)
}

fn build_date() -> String {
	run("date", &["+%Y-%m-%d"])
}

fn run(cmd: &str, args: &[&str]) -> String {
	Command::new(cmd)
		.args(args)
		.output()
		.ok()
		.filter(|output| output.status.success())
		.and_then(|output| String::from_utf8(output.stdout).ok())
		.unwrap_or_else(|| "unknown".into())
		.trim()
		.to_string()
}
