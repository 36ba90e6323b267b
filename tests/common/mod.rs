//! Shared fixtures for integration tests.
//!
//! [`FakeRunner`] stands in for `dotnet`, `iscc`, `hdiutil` and `git`: it
//! records every command and creates the files the real tools would.

#![allow(dead_code)]

use dotnet_packager::bundler::{CommandOutput, CommandRunner, ToolCommand};
use std::{
    cell::RefCell,
    fs, io,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

pub const CSPROJ: &str = r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <OutputType>WinExe</OutputType>
    <TargetFramework>net8.0</TargetFramework>
    <AssemblyName>Notepad</AssemblyName>
    <Company>Contoso Ltd.</Company>
  </PropertyGroup>
</Project>
"#;

/// Scripted stand-in for the external tools.
pub struct FakeRunner {
    /// Programs `find_program` reports as installed
    pub installed: Vec<&'static str>,
    /// Base name of the executable `dotnet publish` produces
    pub executable: String,
    /// Tag printed by `git describe`; `None` simulates a repo without tags
    pub git_tag: Option<String>,
    /// Tools that exit with code 1 and the given output
    pub failing: Vec<(&'static str, &'static str)>,
    /// Every command run, in order
    pub calls: RefCell<Vec<ToolCommand>>,
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self {
            installed: vec!["dotnet", "iscc", "hdiutil", "git"],
            executable: "Notepad".to_string(),
            git_tag: Some("v1.4.0".to_string()),
            failing: Vec::new(),
            calls: RefCell::default(),
        }
    }
}

impl FakeRunner {
    pub fn without(mut self, tool: &str) -> Self {
        self.installed.retain(|t| *t != tool);
        self
    }

    pub fn failing(mut self, tool: &'static str, output: &'static str) -> Self {
        self.failing.push((tool, output));
        self
    }

    /// Commands run for `program`, as lossy argument lists.
    pub fn calls_to(&self, program: &str) -> Vec<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.program_name() == program)
            .map(|c| c.args_lossy())
            .collect()
    }

    fn dotnet(&self, command: &ToolCommand) -> io::Result<()> {
        let out = PathBuf::from(command.arg_after("-o").expect("publish without -o"));
        let rid = command.arg_after("-r").expect("publish without -r");
        let name = if rid.starts_with("win") {
            format!("{}.exe", self.executable)
        } else {
            self.executable.clone()
        };
        fs::create_dir_all(&out)?;
        fs::write(out.join(name), b"\x7fELF")?;
        fs::write(out.join(format!("{}.pdb", self.executable)), b"pdb")?;
        fs::write(out.join("appsettings.json"), b"{}")
    }

    fn iscc(&self, command: &ToolCommand) -> io::Result<()> {
        let args = command.args_lossy();
        let dir = args.iter().find_map(|a| a.strip_prefix("/O")).expect("no /O");
        let base = args.iter().find_map(|a| a.strip_prefix("/F")).expect("no /F");
        let script = args.last().expect("no script");
        assert!(Path::new(script).is_file(), "script missing: {script}");
        fs::create_dir_all(dir)?;
        fs::write(Path::new(dir).join(format!("{base}.exe")), b"MZ")
    }

    fn hdiutil(&self, command: &ToolCommand) -> io::Result<()> {
        let args = command.args_lossy();
        let staging = PathBuf::from(command.arg_after("-srcfolder").expect("no -srcfolder"));
        assert!(
            fs::read_dir(&staging)?.any(|e| {
                e.map(|e| e.file_name().to_string_lossy().ends_with(".app"))
                    .unwrap_or(false)
            }),
            "no .app staged in {}",
            staging.display()
        );
        let dmg = args.last().expect("no dmg path");
        fs::write(dmg, b"koly")
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, command: &ToolCommand) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push(command.clone());
        let program = command.program_name();

        if let Some((_, output)) = self.failing.iter().find(|(tool, _)| *tool == program) {
            return Ok(CommandOutput {
                code: Some(1),
                output: output.to_string(),
            });
        }

        match program.as_str() {
            "dotnet" => self.dotnet(command)?,
            "iscc" => self.iscc(command)?,
            "hdiutil" => self.hdiutil(command)?,
            "git" => {
                return Ok(match &self.git_tag {
                    Some(tag) => CommandOutput {
                        code: Some(0),
                        output: format!("{tag}\n"),
                    },
                    None => CommandOutput {
                        code: Some(128),
                        output: "fatal: No names found, cannot describe anything.\n".into(),
                    },
                });
            }
            other => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{other}: not installed"),
                ));
            }
        }

        Ok(CommandOutput {
            code: Some(0),
            output: format!("{program} ok\n"),
        })
    }

    fn find_program(&self, name: &str) -> Option<PathBuf> {
        self.installed
            .contains(&name)
            .then(|| PathBuf::from("/fake/bin").join(name))
    }
}

/// Temporary project root with one project at `src/Notepad/Notepad.csproj`.
pub fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path(), "src/Notepad/Notepad.csproj");
    dir
}

pub fn write_project(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, CSPROJ).unwrap();
}

pub fn write_config(root: &Path, json: &str) {
    fs::write(root.join("packaging.json"), json).unwrap();
}
