use std::fs;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;

use super::{ApiError, ApiResult, ApiTransport, WireFrame};

const SOCKET_FILE_NAME: &str = "api.sock";

/// Upper bound for a single encoded frame.
pub const MAX_FRAME_LEN: usize = 64 * 1024;

/// Reads one length-prefixed frame.
/// Returns `Ok(None)` when the stream ends on a frame boundary.
pub fn read_frame<R: Read>(reader: &mut R) -> ApiResult<Option<WireFrame>> {
    let mut length_buffer = [0u8; 4];
    match reader.read_exact(&mut length_buffer) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    }

    let length = u32::from_be_bytes(length_buffer) as usize;
    if length == 0 {
        return Err(ApiError::EmptyFrame);
    }
    if length > MAX_FRAME_LEN {
        return Err(ApiError::FrameTooLarge(length));
    }

    let mut data_buffer = vec![0u8; length];
    reader.read_exact(&mut data_buffer)?;

    Ok(Some(bitcode::decode(&data_buffer)?))
}

/// Writes one length-prefixed frame.
pub fn write_frame<W: Write>(writer: &mut W, frame: &WireFrame) -> ApiResult<()> {
    let encoded = bitcode::encode(frame);
    if encoded.len() > MAX_FRAME_LEN {
        return Err(ApiError::FrameTooLarge(encoded.len()));
    }
    let length = encoded.len() as u32;
    writer.write_all(&length.to_be_bytes())?;
    writer.write_all(&encoded)?;
    Ok(())
}

pub struct UnixSocket {
    socket_path: PathBuf,
}

impl UnixSocket {
    pub fn new<P: AsRef<Path>>(workspace_path: P) -> Self {
        let socket_path = workspace_path.as_ref().join(SOCKET_FILE_NAME);

        Self { socket_path }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    fn handle_connection(stream: UnixStream, tx: &Sender<WireFrame>) {
        let mut reader = match stream.try_clone() {
            Ok(stream) => BufReader::new(stream),
            Err(e) => {
                log::error!("failed to clone connection: {e}");
                return;
            }
        };
        let mut stream = stream;

        loop {
            match read_frame(&mut reader) {
                Ok(Some(frame)) => {
                    if tx.send(frame).is_err() {
                        return;
                    }
                }
                Ok(None) => {
                    log::debug!("connection closed");
                    return;
                }
                Err(e) => {
                    log::error!("failed to read frame: {e}");
                    let _ = stream.write_all(format!("ERR {e}\n").as_bytes());
                    return;
                }
            }
        }
    }
}

impl ApiTransport for UnixSocket {
    fn listen_frames(&self, tx: Sender<WireFrame>) -> ApiResult<JoinHandle<()>> {
        let socket_path = self.socket_path.clone();
        if socket_path.exists() {
            fs::remove_file(&socket_path)?;
        }
        let listener = UnixListener::bind(&socket_path)?;
        log::info!("unix socket api listening at {}", socket_path.display());

        let handle = thread::Builder::new()
            .name("motionlinkd-socket-api".into())
            .spawn(move || {
                for stream in listener.incoming() {
                    match stream {
                        Ok(stream) => {
                            // One reader per connection keeps each sender in order.
                            let tx = tx.clone();
                            let spawned = thread::Builder::new()
                                .name("motionlinkd-connection".into())
                                .spawn(move || Self::handle_connection(stream, &tx));
                            if let Err(e) = spawned {
                                log::error!("failed to spawn connection reader: {e}");
                            }
                        }
                        Err(e) => {
                            log::error!("control socket accept error: {}", e);
                            break;
                        }
                    }
                }
            })?;
        Ok(handle)
    }

    fn send_frames(&self, frames: &[WireFrame]) -> ApiResult<()> {
        let stream = UnixStream::connect(&self.socket_path)?;
        let mut writer = BufWriter::new(stream);
        for frame in frames {
            write_frame(&mut writer, frame)?;
        }
        writer.flush()?;

        Ok(())
    }
}
