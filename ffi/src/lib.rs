/*
 * lib.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Tagliacarte, a cross-platform email client.
 *
 * Tagliacarte is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Tagliacarte is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Tagliacarte.  If not, see <http://www.gnu.org/licenses/>.
 */

//! C FFI for mimeparams core. A parameter list is an opaque handle created by
//! mimeparams_list_new or mimeparams_list_parse and released with mimeparams_list_free.
//! Returned strings are newly allocated (free with mimeparams_free_string).
//! All string parameters are UTF-8 NUL-terminated.

use libc::{c_char, c_int, size_t};
use std::ffi::{CStr, CString};
use std::ptr;

use mimeparams_core::{ParameterList, ParseOptions};

/// Opaque parameter list handle.
pub struct MimeParamsList(ParameterList);

thread_local! {
    static LAST_ERROR: std::cell::RefCell<Option<CString>> = std::cell::RefCell::new(None);
}

fn set_last_error(msg: &str) {
    let msg = CString::new(msg).unwrap_or_else(|_| CString::from(c"(error)"));
    LAST_ERROR.with(|e| *e.borrow_mut() = Some(msg));
}

fn clear_last_error() {
    LAST_ERROR.with(|e| *e.borrow_mut() = None);
}

fn ptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr).to_str().ok() }
}

/// NUL bytes cannot cross the C boundary; a value containing one is reported as an error.
fn string_to_c(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => {
            set_last_error("string contains NUL byte");
            ptr::null_mut()
        }
    }
}

unsafe fn list_ref<'a>(list: *const MimeParamsList) -> Option<&'a ParameterList> {
    list.as_ref().map(|l| &l.0)
}

unsafe fn list_mut<'a>(list: *mut MimeParamsList) -> Option<&'a mut ParameterList> {
    list.as_mut().map(|l| &mut l.0)
}

/// Version string (static, do not free).
#[no_mangle]
pub extern "C" fn mimeparams_version() -> *const c_char {
    b"0.1.0\0".as_ptr() as *const c_char
}

/// Last error message from a failed call on this thread. Valid until next FFI call. Do not free.
#[no_mangle]
pub extern "C" fn mimeparams_last_error() -> *const c_char {
    LAST_ERROR.with(|e| {
        e.borrow()
            .as_ref()
            .map(|s| s.as_ptr())
            .unwrap_or(ptr::null())
    })
}

/// Free a string returned by mimeparams_list_get, mimeparams_list_to_string or
/// mimeparams_list_to_folded_string. No-op if ptr is NULL.
#[no_mangle]
pub unsafe extern "C" fn mimeparams_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        let _ = CString::from_raw(ptr);
    }
}

// ---------- Parameter list ----------

/// Create an empty parameter list. Never NULL.
#[no_mangle]
pub extern "C" fn mimeparams_list_new() -> *mut MimeParamsList {
    Box::into_raw(Box::new(MimeParamsList(ParameterList::new())))
}

/// Parse the parameter part of a header (text after the primary value, e.g. "; charset=utf-8").
/// windows_filenames / apple_filenames: non-zero to strip directory parts of filename and name.
/// Returns NULL on error (see mimeparams_last_error).
#[no_mangle]
pub unsafe extern "C" fn mimeparams_list_parse(
    text: *const c_char,
    windows_filenames: c_int,
    apple_filenames: c_int,
) -> *mut MimeParamsList {
    let text = match ptr_to_str(text) {
        Some(s) => s,
        None => {
            set_last_error("text is null or not valid UTF-8");
            return ptr::null_mut();
        }
    };
    let options = ParseOptions {
        windows_filenames: windows_filenames != 0,
        apple_filenames: apple_filenames != 0,
    };
    match ParameterList::parse_with(text, &options) {
        Ok(list) => {
            clear_last_error();
            Box::into_raw(Box::new(MimeParamsList(list)))
        }
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a parameter list. No-op if list is NULL.
#[no_mangle]
pub unsafe extern "C" fn mimeparams_list_free(list: *mut MimeParamsList) {
    if !list.is_null() {
        drop(Box::from_raw(list));
    }
}

/// Decoded value of name (case-insensitive). Caller frees with mimeparams_free_string.
/// NULL if absent or on error.
#[no_mangle]
pub unsafe extern "C" fn mimeparams_list_get(list: *const MimeParamsList, name: *const c_char) -> *mut c_char {
    let (Some(list), Some(name)) = (list_ref(list), ptr_to_str(name)) else {
        set_last_error("list or name is null");
        return ptr::null_mut();
    };
    clear_last_error();
    match list.get(name) {
        Some(v) => string_to_c(v.to_string()),
        None => ptr::null_mut(),
    }
}

/// Set name to value, replacing any parameter of the same name. Returns 0 on success, -1 on error.
#[no_mangle]
pub unsafe extern "C" fn mimeparams_list_set(
    list: *mut MimeParamsList,
    name: *const c_char,
    value: *const c_char,
) -> c_int {
    let (Some(list), Some(name), Some(value)) = (list_mut(list), ptr_to_str(name), ptr_to_str(value)) else {
        set_last_error("list, name or value is null or not valid UTF-8");
        return -1;
    };
    list.set(name, value);
    clear_last_error();
    0
}

/// Remove name. Returns 1 if removed, 0 if absent, -1 on error.
#[no_mangle]
pub unsafe extern "C" fn mimeparams_list_remove(list: *mut MimeParamsList, name: *const c_char) -> c_int {
    let (Some(list), Some(name)) = (list_mut(list), ptr_to_str(name)) else {
        set_last_error("list or name is null");
        return -1;
    };
    clear_last_error();
    if list.remove(name).is_some() {
        1
    } else {
        0
    }
}

/// Number of parameters (0 if list is NULL).
#[no_mangle]
pub unsafe extern "C" fn mimeparams_list_len(list: *const MimeParamsList) -> size_t {
    list_ref(list).map(ParameterList::len).unwrap_or(0)
}

/// Serialized form ("; name=value; ..."). Caller frees with mimeparams_free_string.
#[no_mangle]
pub unsafe extern "C" fn mimeparams_list_to_string(list: *const MimeParamsList) -> *mut c_char {
    match list_ref(list) {
        Some(list) => {
            clear_last_error();
            string_to_c(list.serialize())
        }
        None => {
            set_last_error("list is null");
            ptr::null_mut()
        }
    }
}

/// Serialized form folded for a header line; used = characters already on the line.
/// Caller frees with mimeparams_free_string.
#[no_mangle]
pub unsafe extern "C" fn mimeparams_list_to_folded_string(list: *const MimeParamsList, used: size_t) -> *mut c_char {
    match list_ref(list) {
        Some(list) => {
            clear_last_error();
            string_to_c(list.to_folded_string(used))
        }
        None => {
            set_last_error("list is null");
            ptr::null_mut()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(ptr: *mut c_char) -> Option<String> {
        if ptr.is_null() {
            return None;
        }
        let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        unsafe { mimeparams_free_string(ptr) };
        Some(s)
    }

    #[test]
    fn parse_get_free() {
        unsafe {
            let list = mimeparams_list_parse(c"; p*0=abc; P*1=def; title*=utf-8''%E2%82%AC".as_ptr(), 0, 0);
            assert!(!list.is_null());
            assert_eq!(mimeparams_list_len(list), 2);
            assert_eq!(take(mimeparams_list_get(list, c"p".as_ptr())).as_deref(), Some("abcdef"));
            assert_eq!(take(mimeparams_list_get(list, c"TITLE".as_ptr())).as_deref(), Some("\u{20ac}"));
            assert_eq!(take(mimeparams_list_get(list, c"missing".as_ptr())), None);
            mimeparams_list_free(list);
        }
    }

    #[test]
    fn parse_error_sets_last_error() {
        unsafe {
            let list = mimeparams_list_parse(c"; a=\"open".as_ptr(), 0, 0);
            assert!(list.is_null());
            let err = CStr::from_ptr(mimeparams_last_error()).to_str().unwrap();
            assert!(err.contains("unterminated"));
        }
    }

    #[test]
    fn filename_options() {
        unsafe {
            let list = mimeparams_list_parse(c"; filename=\"dir/sub/file.txt\"".as_ptr(), 0, 1);
            assert_eq!(take(mimeparams_list_get(list, c"filename".as_ptr())).as_deref(), Some("file.txt"));
            mimeparams_list_free(list);
        }
    }

    #[test]
    fn set_remove_serialize() {
        unsafe {
            let list = mimeparams_list_new();
            assert_eq!(mimeparams_list_set(list, c"charset".as_ptr(), c"utf-8".as_ptr()), 0);
            assert_eq!(mimeparams_list_set(list, c"name".as_ptr(), c"a b.txt".as_ptr()), 0);
            assert_eq!(take(mimeparams_list_to_string(list)).as_deref(), Some("; charset=utf-8; name=\"a b.txt\""));
            assert_eq!(mimeparams_list_remove(list, c"CHARSET".as_ptr()), 1);
            assert_eq!(mimeparams_list_remove(list, c"charset".as_ptr()), 0);
            assert_eq!(take(mimeparams_list_to_folded_string(list, 70)).as_deref(), Some(";\r\n\tname=\"a b.txt\""));
            mimeparams_list_free(list);
        }
    }

    #[test]
    fn null_handles() {
        unsafe {
            assert_eq!(mimeparams_list_len(ptr::null()), 0);
            assert!(mimeparams_list_to_string(ptr::null()).is_null());
            assert_eq!(mimeparams_list_set(ptr::null_mut(), c"a".as_ptr(), c"b".as_ptr()), -1);
            mimeparams_list_free(ptr::null_mut());
            mimeparams_free_string(ptr::null_mut());
        }
    }
}
