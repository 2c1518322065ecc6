//! Standard trait surface shared by every list type.
//!
//! Each list type provides `new()`, `raw_iter()`, `into_vec()`,
//! `notifier()`/`notifier_mut()`, `From<Vec<T>>` and a [`Sequence`]
//! impl; this macro derives the rest.
//!
//! [`Sequence`]: duoslot_core::Sequence

macro_rules! list_surface {
    ($list:ident) => {
        impl<T> $list<T> {
            /// Borrowing iterator over the elements, front to back.
            pub fn iter(&self) -> $crate::iter::Iter<'_, T> {
                self.notifier().op(duoslot_core::OpKind::Iterate);
                self.raw_iter()
            }

            /// Forward cursor positioned before the first element.
            pub fn cursor(&mut self) -> $crate::cursor::Cursor<'_, T, Self> {
                self.notifier().op(duoslot_core::OpKind::Iterate);
                $crate::cursor::Cursor::new(self)
            }

            /// Bidirectional cursor positioned before the first element.
            pub fn list_cursor(&mut self) -> $crate::cursor::ListCursor<'_, T, Self> {
                self.notifier().op(duoslot_core::OpKind::Iterate);
                $crate::cursor::ListCursor::new(self)
            }

            /// Bidirectional cursor positioned before the element at `index`.
            ///
            /// # Errors
            ///
            /// [`ListError::IndexOutOfRange`](duoslot_core::ListError::IndexOutOfRange)
            /// if `index > len`.
            pub fn list_cursor_at(
                &mut self,
                index: usize,
            ) -> Result<$crate::cursor::ListCursor<'_, T, Self>, duoslot_core::ListError> {
                self.notifier().op(duoslot_core::OpKind::Iterate);
                $crate::cursor::ListCursor::at(self, index)
            }

            /// Install an observer, returning the one it replaces.
            pub fn attach_observer(
                &mut self,
                observer: std::sync::Arc<dyn duoslot_core::ListObserver>,
            ) -> Option<std::sync::Arc<dyn duoslot_core::ListObserver>> {
                self.notifier_mut().attach(observer)
            }

            /// Remove and return the attached observer.
            pub fn detach_observer(
                &mut self,
            ) -> Option<std::sync::Arc<dyn duoslot_core::ListObserver>> {
                self.notifier_mut().detach()
            }

            /// Whether an observer is attached.
            pub fn has_observer(&self) -> bool {
                self.notifier().is_attached()
            }

            /// Append every value from `values`, stopping at the first failure.
            ///
            /// # Errors
            ///
            /// [`ListError::CapacityExceeded`](duoslot_core::ListError::CapacityExceeded)
            /// if the list cannot grow; values appended before the failure stay.
            pub fn try_extend<I: IntoIterator<Item = T>>(
                &mut self,
                values: I,
            ) -> Result<(), duoslot_core::ListError> {
                for value in values {
                    duoslot_core::Sequence::push(self, value)?;
                }
                Ok(())
            }
        }

        impl<T> Default for $list<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: std::fmt::Debug> std::fmt::Debug for $list<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_list().entries(self.raw_iter()).finish()
            }
        }

        impl<T: PartialEq> PartialEq for $list<T> {
            fn eq(&self, other: &Self) -> bool {
                self.raw_iter().eq(other.raw_iter())
            }
        }

        impl<T: Eq> Eq for $list<T> {}

        impl<T: PartialEq> PartialEq<Vec<T>> for $list<T> {
            fn eq(&self, other: &Vec<T>) -> bool {
                self.raw_iter().eq(other.iter())
            }
        }

        impl<T: PartialEq> PartialEq<[T]> for $list<T> {
            fn eq(&self, other: &[T]) -> bool {
                self.raw_iter().eq(other.iter())
            }
        }

        impl<T: std::hash::Hash> std::hash::Hash for $list<T> {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                let elements = self.raw_iter();
                state.write_usize(elements.len());
                for element in elements {
                    element.hash(state);
                }
            }
        }

        impl<T> FromIterator<T> for $list<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                Self::from(iter.into_iter().collect::<Vec<T>>())
            }
        }

        /// # Panics
        ///
        /// Panics if the list cannot grow, like `Vec` on capacity overflow.
        /// Use `try_extend` to handle the error instead.
        impl<T> Extend<T> for $list<T> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                if let Err(err) = self.try_extend(iter) {
                    panic!("{err}");
                }
            }
        }

        impl<T> IntoIterator for $list<T> {
            type Item = T;
            type IntoIter = std::vec::IntoIter<T>;

            fn into_iter(self) -> Self::IntoIter {
                self.into_vec().into_iter()
            }
        }

        impl<'a, T> IntoIterator for &'a $list<T> {
            type Item = &'a T;
            type IntoIter = $crate::iter::Iter<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }
    };
}

pub(crate) use list_surface;
