pub struct CommandHelp {
    pub name: &'static str,
    pub summary: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandHelp] = &[
    CommandHelp {
        name: "neofetch",
        summary: "Display system information",
        usage: "neofetch",
    },
    CommandHelp {
        name: "ls",
        summary: "List files and folders in the current directory",
        usage: "ls",
    },
    CommandHelp {
        name: "cd",
        summary: "Change the current directory",
        usage: "cd  (prompts for a path; '..' goes up, '~' expands)",
    },
    CommandHelp {
        name: "mkfile",
        summary: "Create a new file",
        usage: "mkfile  (prompts for a file name)",
    },
    CommandHelp {
        name: "mkfolder",
        summary: "Create a new folder",
        usage: "mkfolder  (prompts for a folder name)",
    },
    CommandHelp {
        name: "del",
        summary: "Delete a file",
        usage: "del  (prompts for a file path)",
    },
    CommandHelp {
        name: "open",
        summary: "Open a file or folder with the OS default handler",
        usage: "open  (prompts for a path)",
    },
    CommandHelp {
        name: "rename",
        summary: "Rename a file or folder",
        usage: "rename  (prompts for the current and the new name)",
    },
    CommandHelp {
        name: "move",
        summary: "Move a file or folder into a directory",
        usage: "move  (prompts for source and destination directory)",
    },
    CommandHelp {
        name: "copy",
        summary: "Copy a file or folder into a directory",
        usage: "copy  (prompts for source and destination directory)",
    },
    CommandHelp {
        name: "search",
        summary: "Search for files whose name contains a pattern",
        usage: "search  (prompts for the pattern)",
    },
    CommandHelp {
        name: "cls",
        summary: "Clear the screen",
        usage: "cls",
    },
    CommandHelp {
        name: "help",
        summary: "Display this help",
        usage: "help",
    },
    CommandHelp {
        name: "exit",
        summary: "Exit the shell",
        usage: "exit",
    },
];

pub fn get_help(name: &str) -> Option<&'static CommandHelp> {
    COMMANDS.iter().find(|c| c.name == name)
}

pub fn format_help_list() -> String {
    let mut out = String::new();
    out.push_str("Available commands:\n\n");

    for cmd in COMMANDS {
        out.push_str(&format!("  {:12} {}\n", cmd.name, cmd.summary));
    }

    out
}
