use std::{
    collections::HashMap,
    io::Write,
    process::{Command, Stdio},
};

pub struct VersoTest {
    pub env: HashMap<String, String>,
}

impl VersoTest {
    pub fn new() -> Self {
        Self {
            env: HashMap::new(),
        }
    }

    pub fn verso(&self, args: &[&str]) -> VersoOutput {
        let mut cmd = self.verso_command();
        cmd.args(args);

        let output = cmd.output().expect("Failed to execute verso command");
        VersoOutput { output }
    }

    pub fn verso_with_stdin(&self, args: &[&str], stdin: &str) -> VersoOutput {
        let mut cmd = self.verso_command();
        cmd.args(args).stdin(Stdio::piped()).stdout(Stdio::piped()).stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("Failed to spawn verso command");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write to verso stdin");

        let output = child
            .wait_with_output()
            .expect("Failed to wait for verso command");
        VersoOutput { output }
    }

    pub fn verso_command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_verso"));
        cmd.env_clear().envs(&self.env);
        cmd
    }
}

pub struct VersoOutput {
    pub output: std::process::Output,
}

impl VersoOutput {
    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    #[track_caller]
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.output.status.success(),
            "Expected command to succeed, got {:#?}",
            self.output
        );
        self
    }

    #[track_caller]
    pub fn assert_code(&self, code: i32) -> &Self {
        assert_eq!(
            self.code(),
            Some(code),
            "Unexpected exit status, got {:#?}",
            self.output
        );
        self
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }
}
