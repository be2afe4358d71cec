//! Joining argument lists into a single command-line string.
//!
//! A shim's fixed arguments are stored as one string and re-split by the
//! host when the stub launches its target. The quoter must therefore follow
//! the splitting rules of that host.

/// Joins an ordered argument list into one string that the host re-splits
/// into the same list.
pub trait ArgQuoter {
    fn quote(&self, args: &[String]) -> String;
}

impl<Q: ArgQuoter + ?Sized> ArgQuoter for &Q {
    fn quote(&self, args: &[String]) -> String {
        (**self).quote(args)
    }
}

/// MS C runtime rules, as consumed by `CommandLineToArgvW`.
///
/// Arguments are separated by a single space. An argument is wrapped in
/// double quotes when it is empty or contains a space or tab. Backslashes are
/// literal unless they precede a double quote, in which case they are doubled
/// and the quote is escaped.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowsQuoter;

impl ArgQuoter for WindowsQuoter {
    fn quote(&self, args: &[String]) -> String {
        let mut out = String::new();

        for arg in args {
            if !out.is_empty() {
                out.push(' ');
            }

            let needs_quotes = arg.is_empty() || arg.contains([' ', '\t']);
            if needs_quotes {
                out.push('"');
            }

            let mut backslashes = 0usize;
            for c in arg.chars() {
                match c {
                    '\\' => backslashes += 1,
                    '"' => {
                        out.extend(std::iter::repeat_n('\\', backslashes * 2 + 1));
                        out.push('"');
                        backslashes = 0;
                    }
                    _ => {
                        out.extend(std::iter::repeat_n('\\', backslashes));
                        out.push(c);
                        backslashes = 0;
                    }
                }
            }

            // Trailing backslashes double up only when a closing quote follows.
            let trailing = if needs_quotes {
                backslashes * 2
            } else {
                backslashes
            };
            out.extend(std::iter::repeat_n('\\', trailing));

            if needs_quotes {
                out.push('"');
            }
        }

        out
    }
}

/// POSIX shell rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct PosixQuoter;

impl ArgQuoter for PosixQuoter {
    fn quote(&self, args: &[String]) -> String {
        shell_words::join(args)
    }
}

/// The quoter matching the compilation target.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostQuoter;

impl ArgQuoter for HostQuoter {
    fn quote(&self, args: &[String]) -> String {
        #[cfg(windows)]
        {
            WindowsQuoter.quote(args)
        }
        #[cfg(not(windows))]
        {
            PosixQuoter.quote(args)
        }
    }
}
