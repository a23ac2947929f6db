//! Help banner for the interactive session.

/// Command summary shown at start-up and on `help`.
pub fn help_text() -> &'static str {
    "=== Help ===\n\
     _> help: this help\n\
     _> adduser <user>: add a user\n\
     _> deleteuser <user>: delete a user with their posts\n\
     _> post <user> '<'<post>'>': post a new msg (example: post myuser <my message>)\n\
     _> trending <from timestamp> to <to timestamp>: display trending topics in a period\n\
     _> userposts <user>: display user posts\n\
     _> topicposts <topic>: display topic posts\n\
     _> stats: display store statistics as JSON\n\
     _> quit: quit the cli\n\
     ============\n"
}
