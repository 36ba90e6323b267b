//! Built-in Inno Setup script, used when `Win.InnoScript` is not configured.
//!
//! `{{Token}}` placeholders are filled by the template renderer; every other
//! brace form is Inno Setup syntax and passes through untouched.

pub const ISS_TEMPLATE: &str = r#"; Generated by dotnet-packager. Set Win.InnoScript in packaging.json to use your own script.

[Setup]
AppId={{AppId}}
AppName={{ProductName}}
AppVersion={{Version}}
AppVerName={{ProductName}} {{Version}}
AppPublisher={{Publisher}}
AppPublisherURL={{PublisherUrl}}
AppSupportURL={{PublisherUrl}}
AppCopyright=Copyright (C) {{Year}} {{CompanyName}}
VersionInfoVersion={{VersionInfo}}
VersionInfoProductVersion={{VersionInfo}}
DefaultDirName={autopf}\{{ProductName}}
DefaultGroupName={{ProductName}}
DisableProgramGroupPage=yes
PrivilegesRequiredOverridesAllowed=dialog
OutputDir={{OutputDir}}
OutputBaseFilename={{OutputBase}}
SetupIconFile={{SetupIconFile}}
UninstallDisplayIcon={app}\{{Executable}}
ArchitecturesAllowed={{ArchitecturesAllowed}}
ArchitecturesInstallIn64BitMode={{ArchitecturesInstallIn64BitMode}}
Compression=lzma2
SolidCompression=yes
WizardStyle=modern

[Languages]
Name: "english"; MessagesFile: "compiler:Default.isl"

[Tasks]
Name: "desktopicon"; Description: "{cm:CreateDesktopIcon}"; GroupDescription: "{cm:AdditionalIcons}"; Flags: unchecked

[Files]
Source: "{{SourceDir}}\*"; DestDir: "{app}"; Flags: ignoreversion recursesubdirs createallsubdirs

[Icons]
Name: "{autoprograms}\{{ProductName}}"; Filename: "{app}\{{Executable}}"
Name: "{autodesktop}\{{ProductName}}"; Filename: "{app}\{{Executable}}"; Tasks: desktopicon

[Run]
Filename: "{app}\{{Executable}}"; Description: "{cm:LaunchProgram,{{ProductName}}}"; Flags: nowait postinstall skipifsilent
"#;
