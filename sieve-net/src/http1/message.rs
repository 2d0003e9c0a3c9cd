const CRLF: &[u8] = b"\r\n";
const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";
const HEADER_SEPARATOR: &[u8] = b": ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: Vec<u8>,
    pub value: Vec<u8>,
}

/// Insertion-ordered header map. Names are unique and matched byte-exact;
/// inserting an existing name overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<Header>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &[u8]) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.as_slice())
    }

    pub fn insert(&mut self, name: &[u8], value: &[u8]) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) {
            entry.value = value.to_vec();
        } else {
            self.entries.push(Header {
                name: name.to_vec(),
                value: value.to_vec(),
            });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.entries.iter()
    }
}

/// One HTTP request or response: start line, ordered headers, raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpMessage {
    pub start_line: Vec<u8>,
    pub headers: Headers,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    MissingHeaderTerminator,
    MissingStartLine,
    InvalidHeaderLine,
}

impl HttpMessage {
    /// Splits `raw` on the first CRLFCRLF into head and body, then splits the
    /// head into the start line and `name": "value` header lines. Value bytes
    /// are kept verbatim after the two-byte separator, never trimmed.
    pub fn parse(raw: &[u8]) -> Result<Self, ParseError> {
        let head_end = twoway::find_bytes(raw, HEADER_TERMINATOR).ok_or(ParseError {
            kind: ParseErrorKind::MissingHeaderTerminator,
            offset: raw.len(),
        })?;
        let head = &raw[..head_end];
        let body = raw[head_end + HEADER_TERMINATOR.len()..].to_vec();

        let (start_line, mut cursor) = match twoway::find_bytes(head, CRLF) {
            Some(line_end) => (&head[..line_end], line_end + CRLF.len()),
            None => (head, head.len()),
        };
        if start_line.is_empty() {
            return Err(ParseError {
                kind: ParseErrorKind::MissingStartLine,
                offset: 0,
            });
        }

        let mut headers = Headers::new();
        while cursor < head.len() {
            let line_end = twoway::find_bytes(&head[cursor..], CRLF)
                .map(|offset| cursor + offset)
                .unwrap_or(head.len());
            let line = &head[cursor..line_end];
            let separator = twoway::find_bytes(line, HEADER_SEPARATOR).ok_or(ParseError {
                kind: ParseErrorKind::InvalidHeaderLine,
                offset: cursor,
            })?;
            headers.insert(
                &line[..separator],
                &line[separator + HEADER_SEPARATOR.len()..],
            );
            cursor = line_end + CRLF.len();
        }

        Ok(Self {
            start_line: start_line.to_vec(),
            headers,
            body,
        })
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes =
            Vec::with_capacity(self.start_line.len() + self.body.len() + self.headers.len() * 32);
        bytes.extend_from_slice(&self.start_line);
        bytes.extend_from_slice(CRLF);
        for header in self.headers.iter() {
            bytes.extend_from_slice(&header.name);
            bytes.extend_from_slice(HEADER_SEPARATOR);
            bytes.extend_from_slice(&header.value);
            bytes.extend_from_slice(CRLF);
        }
        bytes.extend_from_slice(CRLF);
        bytes.extend_from_slice(&self.body);
        bytes
    }

    /// Declared body length, if a `Content-Length` header is present and holds
    /// a decimal number. An unparsable value reads as absent.
    pub fn content_length(&self) -> Option<usize> {
        let value = self.headers.get(b"Content-Length")?;
        std::str::from_utf8(value).ok()?.trim().parse::<usize>().ok()
    }

    pub fn set_content_length(&mut self, length: usize) {
        self.headers
            .insert(b"Content-Length", length.to_string().as_bytes());
    }
}
