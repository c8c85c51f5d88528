use crate::types::*;

pub fn decode_to_string(encoding: Encoding, data: &[u8]) -> Result<String, anyhow::Error> {
    match encoding {
        Encoding::Auto => decode_to_string(Encoding::Utf8, data)
            .or_else(|_| decode_to_string(Encoding::Gb2312, data)),
        Encoding::Utf8 => Ok(String::from_utf8(data.to_vec())?),
        Encoding::Gb2312 => {
            let result = encoding_rs::GBK.decode(data);
            if result.2 {
                Err(anyhow::anyhow!("Failed to decode GB2312"))
            } else {
                Ok(result.0.to_string())
            }
        }
    }
}

/// Decodes the data and returns the encoding actually used.
/// [Encoding::Auto] is resolved to the first encoding which decodes the data.
pub fn decode_detect(
    encoding: Encoding,
    data: &[u8],
) -> Result<(String, Encoding), anyhow::Error> {
    match encoding {
        Encoding::Auto => decode_detect(Encoding::Utf8, data)
            .or_else(|_| decode_detect(Encoding::Gb2312, data)),
        _ => Ok((decode_to_string(encoding, data)?, encoding)),
    }
}

/// Encodes the text. Characters which cannot be encoded are an error.
/// [Encoding::Auto] must be resolved with [decode_detect] first.
pub fn encode_string(encoding: Encoding, data: &str) -> Result<Vec<u8>, anyhow::Error> {
    match encoding {
        Encoding::Auto => Err(anyhow::anyhow!(
            "Cannot encode text without a concrete encoding"
        )),
        Encoding::Utf8 => Ok(data.as_bytes().to_vec()),
        Encoding::Gb2312 => {
            let result = encoding_rs::GBK.encode(data);
            if result.2 {
                return Err(anyhow::anyhow!("Failed to encode GB2312"));
            }
            Ok(result.0.to_vec())
        }
    }
}

#[test]
fn test_decode_to_string() {
    assert_eq!(
        decode_to_string(
            Encoding::Utf8,
            &[228, 184, 173, 230, 150, 135, 230, 181, 139, 232, 175, 149]
        )
        .unwrap(),
        "中文测试".to_string()
    );
    assert_eq!(
        decode_to_string(Encoding::Utf8, &[0xEF, 0xBB, 0xBF, 228, 184, 173]).unwrap(),
        "\u{FEFF}中".to_string()
    );
    assert_eq!(
        decode_to_string(Encoding::Gb2312, &[214, 208, 206, 196]).unwrap(),
        "中文".to_string()
    );
    assert_eq!(
        decode_to_string(Encoding::Auto, &[214, 208, 206, 196]).unwrap(),
        "中文".to_string()
    );
    assert!(decode_to_string(Encoding::Utf8, &[214, 208, 206, 196]).is_err());
}

#[test]
fn test_decode_detect() {
    assert_eq!(
        decode_detect(Encoding::Auto, &[214, 208, 206, 196]).unwrap(),
        ("中文".to_string(), Encoding::Gb2312)
    );
    assert_eq!(
        decode_detect(Encoding::Auto, &[228, 184, 173]).unwrap(),
        ("中".to_string(), Encoding::Utf8)
    );
}

#[test]
fn test_encode_string() {
    assert_eq!(
        encode_string(Encoding::Utf8, "中文测试").unwrap(),
        vec![228, 184, 173, 230, 150, 135, 230, 181, 139, 232, 175, 149]
    );
    assert_eq!(
        encode_string(Encoding::Gb2312, "中文").unwrap(),
        vec![214, 208, 206, 196]
    );
    assert!(encode_string(Encoding::Gb2312, "😀").is_err());
    assert!(encode_string(Encoding::Auto, "中文").is_err());
}
