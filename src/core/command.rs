use std::fmt;

use bytes::Bytes;

use crate::proto::frame::Frame;
use crate::{Error, Result};

/// A command ready to be handed to an [`Executor`](crate::Executor).
///
/// Commands are built using the builder pattern and converted to frames
/// by whatever transport executes them.
///
/// # Example
///
/// ```
/// use muxis_topology::Cmd;
///
/// let cmd = Cmd::new("CLUSTER").arg("meet").arg("127.0.0.1").arg("7001");
/// assert_eq!(cmd.name(), b"CLUSTER".as_slice());
/// assert_eq!(cmd.args().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cmd {
    args: Vec<Bytes>,
}

impl Cmd {
    /// Creates a new command with the given name.
    ///
    /// # Arguments
    ///
    /// * `name` - The command name (e.g., "CLUSTER")
    #[inline]
    pub fn new(name: impl Into<Bytes>) -> Self {
        Self {
            args: vec![name.into()],
        }
    }

    /// Appends an argument to the command.
    ///
    /// # Arguments
    ///
    /// * `arg` - The argument value
    #[inline]
    pub fn arg<T: Into<Bytes>>(mut self, arg: T) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Returns the command name (the first argument).
    #[inline]
    pub fn name(&self) -> &[u8] {
        &self.args[0]
    }

    /// Returns all arguments, the command name included.
    #[inline]
    pub fn args(&self) -> &[Bytes] {
        &self.args
    }

    /// Converts the command to a RESP Array frame.
    #[inline]
    pub fn into_frame(self) -> Frame {
        Frame::Array(self.args.into_iter().map(Frame::bulk).collect())
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", String::from_utf8_lossy(arg))?;
        }
        Ok(())
    }
}

/// A submitted command together with its outcome.
///
/// Returned by every [`ClusterAdmin`](crate::ClusterAdmin) call. The outcome
/// is fixed at construction; inspecting it never triggers I/O.
#[derive(Debug)]
pub struct Request<T> {
    cmd: Cmd,
    result: Result<T>,
}

impl<T> Request<T> {
    pub(crate) fn new(cmd: Cmd, result: Result<T>) -> Self {
        Self { cmd, result }
    }

    /// Returns the command that was submitted.
    pub fn cmd(&self) -> &Cmd {
        &self.cmd
    }

    /// Returns the reply value, if the request succeeded.
    pub fn val(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    /// Returns the error, if the request failed.
    pub fn err(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }

    /// Consumes the request and returns its outcome.
    pub fn result(self) -> Result<T> {
        self.result
    }
}

impl<T: fmt::Debug> fmt::Display for Request<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(val) => write!(f, "{}: {:?}", self.cmd, val),
            Err(err) => write!(f, "{}: {}", self.cmd, err),
        }
    }
}

/// Maps an error frame to [`Error::Server`] and passes anything else through.
pub fn parse_frame_response(frame: Frame) -> Result<Frame> {
    match frame {
        Frame::Error(e) => Err(Error::Server {
            message: String::from_utf8_lossy(&e).into_owned(),
        }),
        _ => Ok(frame),
    }
}

/// Converts a status reply (`+OK`) into its text.
pub fn frame_to_status(frame: Frame) -> Result<String> {
    match parse_frame_response(frame)? {
        Frame::SimpleString(s) => Ok(String::from_utf8_lossy(&s).into_owned()),
        other => Err(Error::Protocol {
            message: format!("expected status reply, got {}", other),
        }),
    }
}

/// Converts a bulk or simple string reply into a `String`.
pub fn frame_to_string(frame: Frame) -> Result<String> {
    match parse_frame_response(frame)? {
        Frame::BulkString(Some(b)) => Ok(String::from_utf8_lossy(&b).into_owned()),
        Frame::SimpleString(s) => Ok(String::from_utf8_lossy(&s).into_owned()),
        other => Err(Error::Protocol {
            message: format!("expected string reply, got {}", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_into_frame() {
        let cmd = Cmd::new("CLUSTER").arg("slots");
        assert_eq!(
            cmd.into_frame(),
            Frame::Array(vec![
                Frame::BulkString(Some("CLUSTER".into())),
                Frame::BulkString(Some("slots".into()))
            ])
        );
    }

    #[test]
    fn test_cmd_display() {
        let cmd = Cmd::new("CLUSTER").arg("addslots").arg("1").arg("2");
        assert_eq!(cmd.to_string(), "CLUSTER addslots 1 2");
        assert_eq!(cmd.name(), b"CLUSTER");
    }

    #[test]
    fn test_request_ok() {
        let req = Request::new(Cmd::new("PING"), Ok("PONG".to_string()));
        assert_eq!(req.val().map(String::as_str), Some("PONG"));
        assert!(req.err().is_none());
        assert_eq!(req.to_string(), "PING: \"PONG\"");
        assert_eq!(req.result().unwrap(), "PONG");
    }

    #[test]
    fn test_request_err() {
        let req: Request<String> = Request::new(
            Cmd::new("CLUSTER").arg("replicate").arg("abc"),
            Err(Error::Server {
                message: "ERR Unknown node abc".to_string(),
            }),
        );
        assert!(req.val().is_none());
        assert!(matches!(req.err(), Some(Error::Server { .. })));
        assert_eq!(
            req.to_string(),
            "CLUSTER replicate abc: server error: ERR Unknown node abc"
        );
        assert!(req.result().is_err());
    }

    #[test]
    fn test_parse_frame_response_error() {
        let result = parse_frame_response(Frame::Error(b"ERR nope".to_vec()));
        match result {
            Err(Error::Server { message }) => assert_eq!(message, "ERR nope"),
            _ => panic!("Expected Server error"),
        }
        assert_eq!(
            parse_frame_response(Frame::Integer(1)).unwrap(),
            Frame::Integer(1)
        );
    }

    #[test]
    fn test_frame_to_status() {
        assert_eq!(
            frame_to_status(Frame::SimpleString(b"OK".to_vec())).unwrap(),
            "OK"
        );
        assert!(matches!(
            frame_to_status(Frame::Integer(1)),
            Err(Error::Protocol { .. })
        ));
        assert!(matches!(
            frame_to_status(Frame::Error(b"ERR x".to_vec())),
            Err(Error::Server { .. })
        ));
    }

    #[test]
    fn test_frame_to_string() {
        assert_eq!(frame_to_string(Frame::bulk("a b c")).unwrap(), "a b c");
        assert_eq!(
            frame_to_string(Frame::SimpleString(b"OK".to_vec())).unwrap(),
            "OK"
        );
        assert!(matches!(
            frame_to_string(Frame::Null),
            Err(Error::Protocol { .. })
        ));
    }
}
